//! # Registry Concurrency
//!
//! Swaps on one pool serialize; swaps on different pools do not interfere.

mod common;

use std::sync::{Arc, Barrier};
use std::thread;

use integral_core::{FeeFactors, IntegralCoreError, PoolId, PoolRegistry, SlidingFeeConfig};

const THREADS: usize = 8;
const ROUND_TRIPS: usize = 200;

#[test]
fn test_concurrent_round_trips_on_one_pool() {
    common::tracing::init_test_tracing();
    let registry = Arc::new(PoolRegistry::new());
    let pool = registry.register(SlidingFeeConfig::default()).unwrap();
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let delta = 10 + i as i32;
                for _ in 0..ROUND_TRIPS {
                    // Both halves in one critical section so no other thread
                    // can observe or clamp the intermediate state
                    registry
                        .with_pool(pool, |engine| {
                            engine.get_fee_and_update_factors(true, delta, 0)?;
                            engine.get_fee_and_update_factors(false, 0, delta)
                        })
                        .unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(registry.factors(pool).unwrap(), FeeFactors::neutral());
}

#[test]
fn test_concurrent_swaps_on_separate_pools() {
    common::tracing::init_test_tracing();
    let registry = Arc::new(PoolRegistry::new());
    let pools: Vec<PoolId> = (0..THREADS)
        .map(|_| registry.register(SlidingFeeConfig::default()).unwrap())
        .collect();

    let handles: Vec<_> = pools
        .iter()
        .copied()
        .enumerate()
        .map(|(i, pool)| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let mut last_tick = 0;
                for step in 1..=ROUND_TRIPS as i32 {
                    // Pools walk up or down depending on parity
                    let tick = if i % 2 == 0 { step } else { -step };
                    registry.swap_fee(pool, i % 2 == 0, tick, last_tick).unwrap();
                    last_tick = tick;
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    for (i, pool) in pools.iter().enumerate() {
        let factors = registry.factors(*pool).unwrap();
        if i % 2 == 0 {
            assert!(factors.one_to_zero_fee_factor > factors.zero_to_one_fee_factor);
        } else {
            assert!(factors.one_to_zero_fee_factor < factors.zero_to_one_fee_factor);
        }
    }

    // Every even pool saw the same sequence of moves
    assert_eq!(registry.factors(pools[0]).unwrap(), registry.factors(pools[2]).unwrap());
}

#[test]
fn test_closure_error_propagates() {
    let registry = PoolRegistry::new();
    let pool = registry.register(SlidingFeeConfig::default()).unwrap();

    let err = registry
        .with_pool(pool, |engine| {
            engine.get_fee_and_update_factors(true, 100, 0)?;
            Err::<(), _>(IntegralCoreError::config("aborted swap"))
        })
        .unwrap_err();
    assert_eq!(err, IntegralCoreError::Config("aborted swap".into()));

    // Updates made before the closure failed are kept
    assert_ne!(registry.factors(pool).unwrap(), FeeFactors::neutral());

    assert!(matches!(
        registry.swap_fee(PoolId(42), true, 1, 0),
        Err(IntegralCoreError::PoolNotFound(PoolId(42)))
    ));
}
