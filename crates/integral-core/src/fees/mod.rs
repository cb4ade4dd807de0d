//! # Fees
//!
//! Adaptive (volatility driven) and sliding (direction driven) fee engines.
//! Fees are in millionths: 100 is 0.01%.

pub mod adaptive_fee;
pub mod sliding_fee;

pub use adaptive_fee::*;
pub use sliding_fee::*;

use ethnum::U256;
use integral_math::{mul_div_rounding_up, MathResult};

use crate::constants::FEE_DENOMINATOR;

/// Fee charged on `amount`, rounded up in favour of the pool
pub fn fee_amount(amount: U256, fee: u16) -> MathResult<U256> {
    mul_div_rounding_up(
        amount,
        U256::new(fee as u128),
        U256::new(FEE_DENOMINATOR as u128),
    )
}
