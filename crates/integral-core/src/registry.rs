//! # Pool Registry
//!
//! Owns the sliding fee state of every pool. Each pool sits behind its own
//! mutex so swaps on different pools never contend; the arena lock is only
//! held for writing while a pool is registered.

use std::fmt;
use std::sync::{Arc, Mutex, RwLock};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CoreResult, IntegralCoreError};
use crate::fees::SlidingFeeEngine;
use crate::types::{FeeFactors, SlidingFeeConfig};

/// Index of a pool in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PoolId(pub u32);

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pool#{}", self.0)
    }
}

/// Arena of per-pool sliding fee engines
#[derive(Debug, Default)]
pub struct PoolRegistry {
    pools: RwLock<Vec<Arc<Mutex<SlidingFeeEngine>>>>,
}

impl PoolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pool at neutral factors
    pub fn register(&self, config: SlidingFeeConfig) -> CoreResult<PoolId> {
        let engine = SlidingFeeEngine::new(config)?;

        let mut pools = self
            .pools
            .write()
            .map_err(|_| IntegralCoreError::RegistryLockPoisoned)?;
        let id = u32::try_from(pools.len())
            .map(PoolId)
            .map_err(|_| IntegralCoreError::invalid_parameter("pool_count", pools.len(), "at most u32::MAX"))?;
        pools.push(Arc::new(Mutex::new(engine)));

        debug!(pool = %id, base_fee = config.base_fee, "Pool registered");
        Ok(id)
    }

    fn pool(&self, id: PoolId) -> CoreResult<Arc<Mutex<SlidingFeeEngine>>> {
        let pools = self
            .pools
            .read()
            .map_err(|_| IntegralCoreError::RegistryLockPoisoned)?;
        pools
            .get(id.0 as usize)
            .cloned()
            .ok_or(IntegralCoreError::PoolNotFound(id))
    }

    /// Run `f` inside the pool's critical section
    ///
    /// The arena lock is released before the pool lock is taken.
    pub fn with_pool<R>(
        &self,
        id: PoolId,
        f: impl FnOnce(&mut SlidingFeeEngine) -> CoreResult<R>,
    ) -> CoreResult<R> {
        let pool = self.pool(id)?;
        let mut engine = pool
            .lock()
            .map_err(|_| IntegralCoreError::PoolLockPoisoned(id))?;
        f(&mut *engine)
    }

    /// Update the pool's factors for a swap and return its fee
    pub fn swap_fee(
        &self,
        id: PoolId,
        zero_to_one: bool,
        current_tick: i32,
        last_tick: i32,
    ) -> CoreResult<u16> {
        self.with_pool(id, |engine| {
            engine.get_fee_and_update_factors(zero_to_one, current_tick, last_tick)
        })
    }

    pub fn factors(&self, id: PoolId) -> CoreResult<FeeFactors> {
        self.with_pool(id, |engine| Ok(engine.factors()))
    }

    pub fn len(&self) -> CoreResult<usize> {
        self.pools
            .read()
            .map(|pools| pools.len())
            .map_err(|_| IntegralCoreError::RegistryLockPoisoned)
    }

    pub fn is_empty(&self) -> CoreResult<bool> {
        Ok(self.len()? == 0)
    }
}
