//! 生成に関するデザインパターンの実装
//!
//! - factories: 文字列キーから図形を生成する Factory Pattern
//! - singleton: 一度だけ生成される共有インスタンスの Singleton Pattern
//!
//! 2つのパターンは独立しており、互いにデータをやり取りしない
//! （グローバルファクトリーの保持に `SingletonHolder` を使う点を除く）。

pub mod cli;
pub mod core;
pub mod factories;
pub mod shapes;
pub mod singleton;

pub use crate::core::{DemoConfig, PatternError, PatternResult};
pub use factories::{create_shape, get_shape_factory, ComponentFactory, ShapeFactory};
pub use shapes::{AnyShape, Shape, ShapeKind};
pub use singleton::{InitStrategy, SingleObject, SingletonHolder, SingletonObject};
