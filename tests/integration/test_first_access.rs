// SingleObject の初回アクセス競合テスト
//
// このバイナリの中で SingleObject に触れるのはこのテストだけなので、
// スレッドは未初期化状態から本当に初回アクセスを競い合う。
use creator_patterns::{SingleObject, SingletonObject};
use std::sync::{Arc, Barrier};
use std::thread;

const THREADS: usize = 32;

#[test]
fn test_concurrent_first_access_constructs_once() {
    assert!(!SingleObject::is_initialized());
    assert_eq!(<SingleObject as SingletonObject>::constructions(), 0);

    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                SingleObject::instance() as *const SingleObject as usize
            })
        })
        .collect();

    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(addresses.iter().all(|&a| a == addresses[0]));
    assert_eq!(<SingleObject as SingletonObject>::constructions(), 1);
    assert!(SingleObject::is_initialized());
}
