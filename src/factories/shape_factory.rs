//! ShapeFactory - 図形の Factory Pattern 実装
//!
//! 文字列キーを大文字小文字を区別せずに `ShapeKind` へ解決し、
//! 呼び出しごとに新しい図形を生成する（キャッシュしない）。

use super::ComponentFactory;
use crate::core::{PatternError, PatternResult};
use crate::shapes::{AnyShape, Shape, ShapeKind};
use crate::singleton::SingletonHolder;

#[derive(Debug, Default, Clone, Copy)]
pub struct ShapeFactory;

impl ShapeFactory {
    pub fn new() -> Self {
        Self
    }

    /// キーから図形を生成（未知のキーや空文字列はNone）
    pub fn create(&self, key: &str) -> Option<Box<dyn Shape>> {
        self.get_shape(Some(key))
    }

    /// キー未指定を許容する版
    pub fn get_shape(&self, key: Option<&str>) -> Option<Box<dyn Shape>> {
        self.resolve(key).map(ShapeKind::boxed)
    }

    /// 種別タグから直接生成
    pub fn create_kind(&self, kind: ShapeKind) -> Box<dyn Shape> {
        kind.boxed()
    }

    /// 静的ディスパッチ版の図形を生成
    pub fn create_static(&self, key: &str) -> Option<AnyShape> {
        self.resolve(Some(key)).map(ShapeKind::instantiate)
    }

    pub fn available_shapes(&self) -> Vec<String> {
        ShapeKind::all().map(|kind| kind.to_string()).collect()
    }

    fn resolve(&self, key: Option<&str>) -> Option<ShapeKind> {
        let Some(key) = key else {
            log::debug!("図形キーが指定されていません");
            return None;
        };

        let kind = ShapeKind::from_key(key);
        if kind.is_none() {
            log::debug!("未知の図形キー: '{key}'");
        }
        kind
    }
}

impl ComponentFactory<Box<dyn Shape>> for ShapeFactory {
    fn try_create(&self, implementation: &str) -> PatternResult<Box<dyn Shape>> {
        self.create(implementation)
            .ok_or_else(|| PatternError::unknown_shape(implementation, self.available_shapes()))
    }

    fn available_implementations(&self) -> Vec<String> {
        self.available_shapes()
    }

    fn get_description(&self, implementation: &str) -> Option<String> {
        ShapeKind::from_key(implementation).map(|kind| kind.description().to_string())
    }
}

/// グローバルファクトリーのシングルトン
static GLOBAL_FACTORY: SingletonHolder<ShapeFactory> = SingletonHolder::new();

/// グローバル図形ファクトリーを取得
pub fn get_shape_factory() -> &'static ShapeFactory {
    GLOBAL_FACTORY.get_or_init(ShapeFactory::new)
}

/// 便利関数：キーから図形を生成
pub fn create_shape(key: &str) -> Option<Box<dyn Shape>> {
    get_shape_factory().create(key)
}
