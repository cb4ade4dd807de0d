//! # Bit Math
//!
//! Most and least significant set bit of a 256-bit word, found by halving
//! the search window: 128, 64, 32, 16, 8, 4, 2, 1.

use ethnum::U256;

use crate::errors::{MathError, MathResult};

/// Window widths for the binary partition, widest first
const HALVINGS: [u32; 8] = [128, 64, 32, 16, 8, 4, 2, 1];

/// Mask with the low `bits` bits set
fn low_mask(bits: u32) -> U256 {
    U256::MAX >> (256 - bits)
}

/// 0-based index of the lowest set bit
///
/// `least_significant_bit(x) == k` such that `x & (1 << k) != 0` and
/// `x & ((1 << k) - 1) == 0`.
pub fn least_significant_bit(x: U256) -> MathResult<u8> {
    if x == U256::ZERO {
        return Err(MathError::ZeroInput);
    }

    let mut x = x;
    let mut r: u32 = 255;
    for bits in HALVINGS {
        if x & low_mask(bits) != U256::ZERO {
            r -= bits;
        } else {
            x = x >> bits;
        }
    }

    Ok(r as u8)
}

/// 0-based index of the highest set bit
///
/// `x >= 2**most_significant_bit(x)` and `x < 2**(most_significant_bit(x) + 1)`.
pub fn most_significant_bit(x: U256) -> MathResult<u8> {
    if x == U256::ZERO {
        return Err(MathError::ZeroInput);
    }

    let mut x = x;
    let mut r: u32 = 0;
    for bits in HALVINGS {
        if x >= (U256::ONE << bits) {
            x = x >> bits;
            r += bits;
        }
    }

    Ok(r as u8)
}
