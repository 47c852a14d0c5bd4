// コアレイヤー - エラー型とデモ設定
// 他のレイヤーから参照される基本的な定義を提供

pub mod config;
pub mod error;

// 公開API
pub use config::{DemoConfig, MAX_THREADS};
pub use error::{PatternError, PatternResult};
