//! # Math Constants
//!
//! Fixed-point scales and integer bounds shared by every module.

use ethnum::U256;

/// Q96 fixed-point scale factor: 2^96
pub const Q96: u128 = 1u128 << 96;

/// Q128 fixed-point scale factor: 2^128 (does not fit u128)
pub const Q128: U256 = U256::from_words(1, 0);

/// Resolution of Q96 values in bits
pub const RESOLUTION_96: u32 = 96;

/// Resolution of Q128 values in bits
pub const RESOLUTION_128: u32 = 128;

/// Largest value representable as uint160
pub const U160_MAX: U256 = U256::from_words(u32::MAX as u128, u128::MAX);

/// Minimum tick supported by `get_sqrt_ratio_at_tick`
pub const MIN_TICK: i32 = -887_272;

/// Maximum tick supported by `get_sqrt_ratio_at_tick`
pub const MAX_TICK: i32 = 887_272;
