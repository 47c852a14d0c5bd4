//! 図形モジュール - Factory Pattern で生成される製品群
//!
//! - Shape: 描画可能な図形の共通トレイト（動的ディスパッチ用）
//! - ShapeKind: 閉じた図形タグ（文字列キーの解決先）
//! - AnyShape: 静的ディスパッチ用の列挙型（ヒープ確保・vtableなし）

use mockall::automock;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use strum::IntoEnumIterator;

pub mod circle;
pub mod rectangle;
pub mod square;

pub use circle::Circle;
pub use rectangle::Rectangle;
pub use square::Square;

/// 描画可能な図形のトレイト
#[automock]
pub trait Shape: Send + Sync {
    /// 図形の種別
    fn kind(&self) -> ShapeKind;

    /// インスタンス識別子（生成ごとに一意、振る舞いには影響しない）
    fn id(&self) -> u64;

    /// 描画時に出力される行
    fn draw_line(&self) -> String;

    /// 標準出力へ描画
    fn draw(&self) {
        println!("{}", self.draw_line());
    }
}

// Shape for Box<dyn Shape>
impl Shape for Box<dyn Shape> {
    fn kind(&self) -> ShapeKind {
        self.as_ref().kind()
    }

    fn id(&self) -> u64 {
        self.as_ref().id()
    }

    fn draw_line(&self) -> String {
        self.as_ref().draw_line()
    }

    fn draw(&self) {
        self.as_ref().draw()
    }
}

/// 図形の種別タグ
///
/// 文字列キーは大文字小文字を区別せずにこのタグへ解決される
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Square,
}

impl ShapeKind {
    /// 文字列キーから種別を解決（未知のキーはNone）
    pub fn from_key(key: &str) -> Option<Self> {
        key.parse().ok()
    }

    /// 全種別を宣言順に列挙
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// 型名（描画メッセージに使われる表記）
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Circle => "Circle",
            Self::Rectangle => "Rectangle",
            Self::Square => "Square",
        }
    }

    /// 種別の説明
    pub fn description(self) -> &'static str {
        match self {
            Self::Circle => "円",
            Self::Rectangle => "長方形",
            Self::Square => "正方形",
        }
    }

    /// 静的ディスパッチ用の図形を生成
    pub fn instantiate(self) -> AnyShape {
        match self {
            Self::Circle => AnyShape::Circle(Circle::new()),
            Self::Rectangle => AnyShape::Rectangle(Rectangle::new()),
            Self::Square => AnyShape::Square(Square::new()),
        }
    }

    /// 動的ディスパッチ用の図形を生成
    pub fn boxed(self) -> Box<dyn Shape> {
        match self {
            Self::Circle => Box::new(Circle::new()),
            Self::Rectangle => Box::new(Rectangle::new()),
            Self::Square => Box::new(Square::new()),
        }
    }
}

/// 静的ディスパッチ版の図形
#[derive(Debug, PartialEq, Eq)]
pub enum AnyShape {
    Circle(Circle),
    Rectangle(Rectangle),
    Square(Square),
}

impl Shape for AnyShape {
    fn kind(&self) -> ShapeKind {
        match self {
            Self::Circle(shape) => shape.kind(),
            Self::Rectangle(shape) => shape.kind(),
            Self::Square(shape) => shape.kind(),
        }
    }

    fn id(&self) -> u64 {
        match self {
            Self::Circle(shape) => shape.id(),
            Self::Rectangle(shape) => shape.id(),
            Self::Square(shape) => shape.id(),
        }
    }

    fn draw_line(&self) -> String {
        match self {
            Self::Circle(shape) => shape.draw_line(),
            Self::Rectangle(shape) => shape.draw_line(),
            Self::Square(shape) => shape.draw_line(),
        }
    }
}

impl From<AnyShape> for Box<dyn Shape> {
    fn from(shape: AnyShape) -> Self {
        match shape {
            AnyShape::Circle(shape) => Box::new(shape),
            AnyShape::Rectangle(shape) => Box::new(shape),
            AnyShape::Square(shape) => Box::new(shape),
        }
    }
}

static NEXT_SHAPE_ID: AtomicU64 = AtomicU64::new(1);

/// 次のインスタンス識別子を払い出す
pub(crate) fn next_shape_id() -> u64 {
    NEXT_SHAPE_ID.fetch_add(1, Ordering::Relaxed)
}

/// 図形をまとめて出力先へ描画
pub fn draw_all<S: Shape>(shapes: &[S], out: &mut impl Write) -> io::Result<()> {
    for shape in shapes {
        writeln!(out, "{}", shape.draw_line())?;
    }
    Ok(())
}
