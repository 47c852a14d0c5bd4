// 静的初期化シングルトン

use super::{InitStrategy, SingletonObject};
use chrono::{DateTime, Utc};

// 定数評価されるため実行時の生成処理は存在しない
static INSTANCE: EagerObject = EagerObject { _private: () };

/// 読み込み時点で確定している共有オブジェクト
#[derive(Debug)]
pub struct EagerObject {
    _private: (),
}

impl SingletonObject for EagerObject {
    const STRATEGY: InitStrategy = InitStrategy::Eager;

    fn instance() -> &'static Self {
        &INSTANCE
    }

    // 実行時の生成は一度も走らないので常に0
    fn constructions() -> usize {
        0
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        None
    }
}
