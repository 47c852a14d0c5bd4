// 遅延ホルダー方式のシングルトン

use super::{InitStrategy, SingletonObject};
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::LazyLock;

static INSTANCE: LazyLock<HolderObject> = LazyLock::new(HolderObject::new);
static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

/// 初回参照時に `LazyLock` が生成する共有オブジェクト
#[derive(Debug)]
pub struct HolderObject {
    created_at: DateTime<Utc>,
}

impl HolderObject {
    fn new() -> Self {
        let count = CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst) + 1;
        log::info!("HolderObject を生成 (生成回数: {count})");
        Self {
            created_at: Utc::now(),
        }
    }
}

impl SingletonObject for HolderObject {
    const STRATEGY: InitStrategy = InitStrategy::LazyHolder;

    fn instance() -> &'static Self {
        &INSTANCE
    }

    fn constructions() -> usize {
        CONSTRUCTIONS.load(Ordering::SeqCst)
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        Some(self.created_at)
    }
}
