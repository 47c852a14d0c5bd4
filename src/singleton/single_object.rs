// 遅延初期化シングルトン（OnceLockによるガード付き初期化）

use super::{InitStrategy, SingletonHolder, SingletonObject};
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};

static INSTANCE: SingletonHolder<SingleObject> = SingletonHolder::new();
static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

/// 初回アクセス時に1回だけ生成される共有オブジェクト
#[derive(Debug)]
pub struct SingleObject {
    created_at: DateTime<Utc>,
}

impl SingleObject {
    // 生成経路は instance() のみ
    fn new() -> Self {
        let count = CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst) + 1;
        log::info!("SingleObject を生成 (生成回数: {count})");
        Self {
            created_at: Utc::now(),
        }
    }

    /// 共有インスタンスを取得
    ///
    /// 並行した初回アクセスでは1スレッドだけが生成し、他は完了まで待機する。
    pub fn instance() -> &'static Self {
        INSTANCE.get_or_init(Self::new)
    }

    pub fn is_initialized() -> bool {
        INSTANCE.is_initialized()
    }
}

impl SingletonObject for SingleObject {
    const STRATEGY: InitStrategy = InitStrategy::Guarded;

    fn instance() -> &'static Self {
        SingleObject::instance()
    }

    fn constructions() -> usize {
        CONSTRUCTIONS.load(Ordering::SeqCst)
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        Some(self.created_at)
    }
}
