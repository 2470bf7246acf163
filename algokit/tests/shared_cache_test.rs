//! SharedFibonacci used from several threads at once.

use std::thread;

use algokit::{AlgoErrorKind, FibonacciCache, SharedFibonacci};

fn reference(n: usize) -> u64 {
    if n == 0 {
        return 0;
    }
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 1..n {
        (a, b) = (b, a + b);
    }
    b
}

#[test]
fn test_concurrent_callers_see_correct_terms() {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    let shared = SharedFibonacci::new();
    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let fib = shared.clone();
            thread::spawn(move || {
                for step in 0..50 {
                    let n = (worker * 7 + step * 3) % 90;
                    let value = fib.compute_nth_term(n as i64).unwrap();
                    assert_eq!(value, reference(n), "F({n}) on worker {worker}");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let stats = shared.stats();
    assert_eq!(stats.hits + stats.misses, 8 * 50);
    // the table only ever grows to the largest index requested
    assert!(stats.len <= 90);
    // each miss extends the table, so there can be no more misses than new terms
    assert!(stats.misses as usize <= stats.len - 2);
    // every index past the seeds was derived exactly once
    assert_eq!(stats.computed as usize, stats.len - 2);
}

#[test]
fn test_errors_do_not_disturb_shared_state() {
    let shared = SharedFibonacci::new();
    assert_eq!(shared.compute_nth_term(50).unwrap(), 12_586_269_025);

    let err = shared.compute_nth_term(-3).unwrap_err();
    assert_eq!(err.kind(), AlgoErrorKind::InvalidInput);

    let err = shared.compute_nth_term(120).unwrap_err();
    assert_eq!(err.kind(), AlgoErrorKind::Overflow);

    // terms computed before the overflow are kept
    assert_eq!(shared.stats().len, 94);
    assert_eq!(shared.compute_nth_term(93).unwrap(), reference(93));
    assert_eq!(shared.stats().computed, 92);
}

#[test]
fn test_owned_cache_moves_into_shared_handle() {
    let mut cache = FibonacciCache::new();
    cache.compute_nth_term(10).unwrap();
    let shared = SharedFibonacci::from_cache(cache);

    let fib = shared.clone();
    let value = thread::spawn(move || fib.compute_nth_term(10).unwrap())
        .join()
        .unwrap();
    assert_eq!(value, 55);
    assert_eq!(shared.stats().hits, 1);
}
