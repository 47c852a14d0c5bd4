// 長方形 (Rectangle) の実装

use super::{next_shape_id, Shape, ShapeKind};

/// 長方形
#[derive(Debug, PartialEq, Eq)]
pub struct Rectangle {
    id: u64,
}

impl Rectangle {
    pub fn new() -> Self {
        let id = next_shape_id();
        log::trace!("Rectangle を生成 (id={id})");
        Self { id }
    }
}

impl Default for Rectangle {
    fn default() -> Self {
        Self::new()
    }
}

impl Shape for Rectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn draw_line(&self) -> String {
        "Inside Rectangle::draw() method.".to_string()
    }
}
