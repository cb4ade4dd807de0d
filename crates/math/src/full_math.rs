//! # Full Math
//!
//! Multiply-then-divide over a 512-bit intermediate product so that `a * b`
//! may exceed 256 bits without losing precision. Every multiplication and
//! division in the fee and reward engines goes through here.

use ethnum::U256;

use crate::errors::{MathError, MathResult};

/// Rounding mode for division operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Round down (towards zero)
    Down,
    /// Round up (away from zero)
    Up,
}

/// Full 512-bit product of two 256-bit values, returned as `(hi, lo)`
pub fn full_mul(a: U256, b: U256) -> (U256, U256) {
    let (a1, a0) = a.into_words();
    let (b1, b0) = b.into_words();

    // Each partial product of two u128 values fits in 256 bits
    let p00 = U256::new(a0) * U256::new(b0);
    let p01 = U256::new(a0) * U256::new(b1);
    let p10 = U256::new(a1) * U256::new(b0);
    let p11 = U256::new(a1) * U256::new(b1);

    let (mid, mid_carry) = p01.overflowing_add(p10);
    let (mid_hi, mid_lo) = mid.into_words();

    let (lo, lo_carry) = p00.overflowing_add(U256::from_words(mid_lo, 0));

    // Cannot overflow: the full product is below 2^512
    let mut hi = p11 + U256::new(mid_hi);
    if lo_carry {
        hi = hi + U256::ONE;
    }
    if mid_carry {
        hi = hi + U256::from_words(1, 0);
    }

    (hi, lo)
}

/// Divide the 512-bit value `(hi, lo)` by `denominator`, returning
/// `(quotient, remainder)`. Requires `hi < denominator` so the quotient fits.
fn div_rem_512(hi: U256, lo: U256, denominator: U256) -> (U256, U256) {
    let mut remainder = hi;
    let mut quotient = U256::ZERO;

    // Shift-subtract long division over the low word
    for bit in (0..256u32).rev() {
        let carry = remainder >> 255u32 != U256::ZERO;
        remainder = (remainder << 1u32) | ((lo >> bit) & U256::ONE);
        quotient = quotient << 1u32;

        if carry || remainder >= denominator {
            // With carry set the true remainder is remainder + 2^256, and the
            // difference is below the denominator, so wrapping is exact
            remainder = remainder.wrapping_sub(denominator);
            quotient = quotient | U256::ONE;
        }
    }

    (quotient, remainder)
}

/// Multiply two values and divide by a third with specified rounding
/// result = (a * b) / denominator
pub fn mul_div_with_rounding(
    a: U256,
    b: U256,
    denominator: U256,
    rounding: Rounding,
) -> MathResult<U256> {
    if denominator == U256::ZERO {
        return Err(MathError::DivisionByZero);
    }

    let (hi, lo) = full_mul(a, b);

    let (quotient, remainder) = if hi == U256::ZERO {
        (lo / denominator, lo % denominator)
    } else {
        // The quotient would need more than 256 bits
        if hi >= denominator {
            return Err(MathError::MulDivOverflow);
        }
        div_rem_512(hi, lo, denominator)
    };

    if rounding == Rounding::Up && remainder != U256::ZERO {
        return quotient
            .checked_add(U256::ONE)
            .ok_or(MathError::MulDivOverflow);
    }

    Ok(quotient)
}

/// floor(a * b / denominator) with full 512-bit precision
pub fn mul_div(a: U256, b: U256, denominator: U256) -> MathResult<U256> {
    mul_div_with_rounding(a, b, denominator, Rounding::Down)
}

/// ceil(a * b / denominator) with full 512-bit precision
pub fn mul_div_rounding_up(a: U256, b: U256, denominator: U256) -> MathResult<U256> {
    mul_div_with_rounding(a, b, denominator, Rounding::Up)
}

/// Mul-div over u128 inputs whose result must fit back into u128
pub fn mul_div_u128(a: u128, b: u128, denominator: u128, rounding: Rounding) -> MathResult<u128> {
    let result = mul_div_with_rounding(U256::new(a), U256::new(b), U256::new(denominator), rounding)?;
    crate::safe_math::to_uint128(result).map_err(|_| MathError::MulDivOverflow)
}

/// ceil(x / y)
pub fn div_rounding_up(x: U256, y: U256) -> MathResult<U256> {
    if y == U256::ZERO {
        return Err(MathError::DivisionByZero);
    }
    let quotient = x / y;
    if x % y != U256::ZERO {
        // Cannot overflow: quotient < x when y > 1, and y == 1 leaves no remainder
        return Ok(quotient + U256::ONE);
    }
    Ok(quotient)
}
