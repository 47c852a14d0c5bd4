//! デモ実行設定
//!
//! CLI引数から組み立てるビルダー形式の設定。設定ファイルは扱わない。

use super::{PatternError, PatternResult};
use crate::shapes::ShapeKind;
use crate::singleton::InitStrategy;

/// 初回アクセスを競わせるスレッド数の上限
pub const MAX_THREADS: usize = 256;

/// デモ実行設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    shapes: Vec<String>,
    threads: usize,
    strategy: InitStrategy,
}

impl DemoConfig {
    pub fn new() -> Self {
        Self {
            shapes: ShapeKind::all().map(|kind| kind.to_string()).collect(),
            threads: num_cpus::get().clamp(1, MAX_THREADS),
            strategy: InitStrategy::default(),
        }
    }

    /// 生成する図形キーを設定
    pub fn with_shapes<I, S>(mut self, shapes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.shapes = shapes.into_iter().map(Into::into).collect();
        self
    }

    /// 初回アクセスを競わせるスレッド数を設定
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_strategy(mut self, strategy: InitStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn shapes(&self) -> &[String] {
        &self.shapes
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn strategy(&self) -> InitStrategy {
        self.strategy
    }

    /// 設定の妥当性をチェック
    pub fn validate(&self) -> PatternResult<()> {
        if self.shapes.is_empty() {
            return Err(PatternError::configuration("図形キーが1つも指定されていません"));
        }
        if self.threads == 0 {
            return Err(PatternError::configuration("スレッド数は1以上である必要があります"));
        }
        if self.threads > MAX_THREADS {
            return Err(PatternError::configuration(format!(
                "スレッド数は{MAX_THREADS}以下である必要があります (指定: {})",
                self.threads
            )));
        }
        Ok(())
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::new()
    }
}
