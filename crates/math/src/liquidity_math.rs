//! # Liquidity Math
//!
//! Signed liquidity deltas applied to unsigned liquidity.

use crate::errors::{MathError, MathResult};

/// Add a signed liquidity delta to liquidity
///
/// Fails with `LiquidityAdd` if a non-negative delta overflows u128 and
/// with `LiquiditySub` if a negative delta exceeds the current liquidity.
pub fn add_delta(liquidity: u128, delta: i128) -> MathResult<u128> {
    if delta < 0 {
        liquidity
            .checked_sub(delta.unsigned_abs())
            .ok_or(MathError::LiquiditySub)
    } else {
        liquidity
            .checked_add(delta as u128)
            .ok_or(MathError::LiquidityAdd)
    }
}
