// 正方形 (Square) の実装

use super::{next_shape_id, Shape, ShapeKind};

/// 正方形（状態を持たない）
#[derive(Debug, PartialEq, Eq)]
pub struct Square {
    id: u64,
}

impl Square {
    pub fn new() -> Self {
        let id = next_shape_id();
        log::trace!("Square を生成 (id={id})");
        Self { id }
    }
}

impl Default for Square {
    fn default() -> Self {
        Self::new()
    }
}

impl Shape for Square {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Square
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn draw_line(&self) -> String {
        "Inside Square::draw() method.".to_string()
    }
}
