//! ファクトリーモジュール - 文字列キーからの生成を扱う
//!
//! - ComponentFactory: 実装名から製品を生成する共通トレイト
//! - ShapeFactory: 図形のファクトリー

pub mod shape_factory;

use crate::core::PatternResult;

pub use shape_factory::{create_shape, get_shape_factory, ShapeFactory};

/// 実装名から製品を生成するファクトリーの共通トレイト
pub trait ComponentFactory<T> {
    /// 実装名から生成、未知の名前はエラー
    fn try_create(&self, implementation: &str) -> PatternResult<T>;

    /// 利用可能な実装名の一覧
    fn available_implementations(&self) -> Vec<String>;

    /// 実装の説明
    fn get_description(&self, implementation: &str) -> Option<String>;
}
