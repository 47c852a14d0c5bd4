// シングルトンの並行アクセステスト
use creator_patterns::{InitStrategy, SingleObject, SingletonHolder, SingletonObject};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

const THREADS: usize = 32;

#[test]
fn test_sequential_access_is_identical() {
    let first = SingleObject::instance();
    let created_at = first.created_at();

    for _ in 0..1_000 {
        let again = SingleObject::instance();
        assert!(std::ptr::eq(first, again));
        assert_eq!(again.created_at(), created_at);
    }
}

#[test]
fn test_every_strategy_under_contention() {
    use strum::IntoEnumIterator;

    for strategy in InitStrategy::iter() {
        let barrier = Arc::new(Barrier::new(THREADS));
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    strategy.instance_address()
                })
            })
            .collect();

        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addresses.iter().all(|&a| a == addresses[0]), "{strategy}");
        assert_eq!(
            strategy.report().constructions,
            usize::from(strategy.is_lazy()),
            "{strategy}"
        );
    }
}

static SLOW_HOLDER: SingletonHolder<String> = SingletonHolder::new();
static SLOW_CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

#[test]
fn test_late_callers_wait_for_in_flight_construction() {
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let value = SLOW_HOLDER.get_or_init(|| {
                    SLOW_CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
                    thread::sleep(Duration::from_millis(50));
                    "constructed".to_string()
                });
                // 生成途中の値が見えないこと
                assert_eq!(value, "constructed");
                value as *const String as usize
            })
        })
        .collect();

    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(SLOW_CONSTRUCTIONS.load(Ordering::SeqCst), 1);
    assert!(addresses.iter().all(|&a| a == addresses[0]));
}

static FLAKY_HOLDER: SingletonHolder<u64> = SingletonHolder::new();
static FLAKY_ATTEMPTS: AtomicUsize = AtomicUsize::new(0);

#[test]
fn test_failed_construction_is_not_cached_under_contention() {
    // 最初の試行だけ失敗する生成関数
    fn flaky_init() -> Result<u64, String> {
        let attempt = FLAKY_ATTEMPTS.fetch_add(1, Ordering::SeqCst);
        if attempt == 0 {
            Err("first attempt fails".to_string())
        } else {
            Ok(99)
        }
    }

    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                FLAKY_HOLDER.get_or_try_init(flaky_init).copied()
            })
        })
        .collect();

    let results: Vec<Result<u64, String>> =
        handles.into_iter().map(|h| h.join().unwrap()).collect();

    let failures = results.iter().filter(|r| r.is_err()).count();
    assert_eq!(failures, 1);
    assert!(results.iter().flatten().all(|&value| value == 99));
    assert_eq!(FLAKY_ATTEMPTS.load(Ordering::SeqCst), 2);
    assert_eq!(FLAKY_HOLDER.get(), Some(&99));
}
