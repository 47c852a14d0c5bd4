// 円 (Circle) の実装

use super::{next_shape_id, Shape, ShapeKind};

/// 円
#[derive(Debug, PartialEq, Eq)]
pub struct Circle {
    id: u64,
}

impl Circle {
    pub fn new() -> Self {
        let id = next_shape_id();
        log::trace!("Circle を生成 (id={id})");
        Self { id }
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new()
    }
}

impl Shape for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn draw_line(&self) -> String {
        "Inside Circle::draw() method.".to_string()
    }
}
