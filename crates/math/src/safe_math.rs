//! # Safe Math Operations
//!
//! Overflow-checked arithmetic and range-checked casts. Nothing here ever
//! wraps silently: every out-of-range result is reported as a `MathError`.

use ethnum::{I256, U256};

use crate::constants::U160_MAX;
use crate::errors::{MathError, MathResult};

/// Macro to generate safe arithmetic functions
macro_rules! safe_arith {
    // Division operations with zero check, matched before the generic arm
    // of the same arity
    (div, $fn_name:ident, $type:ty, $zero:expr) => {
        /// Division with zero check
        pub fn $fn_name(a: $type, b: $type) -> MathResult<$type> {
            if b == $zero {
                return Err(MathError::DivisionByZero);
            }
            Ok(a / b)
        }
    };

    // Binary operations with checked methods
    ($fn_name:ident, $type:ty, $checked_method:ident, $error:expr) => {
        /// Checked binary operation, errors instead of wrapping
        pub fn $fn_name(a: $type, b: $type) -> MathResult<$type> {
            a.$checked_method(b).ok_or($error)
        }
    };
}

// Unsigned 256-bit
safe_arith!(safe_add_u256, U256, checked_add, MathError::ArithmeticOverflow);
safe_arith!(safe_sub_u256, U256, checked_sub, MathError::ArithmeticUnderflow);
safe_arith!(safe_mul_u256, U256, checked_mul, MathError::ArithmeticOverflow);
safe_arith!(div, safe_div_u256, U256, U256::ZERO);

// Signed 256-bit: both directions of signed overflow are overflows
safe_arith!(safe_add_i256, I256, checked_add, MathError::ArithmeticOverflow);
safe_arith!(safe_sub_i256, I256, checked_sub, MathError::ArithmeticOverflow);

// Unsigned 128-bit
safe_arith!(safe_add_u128, u128, checked_add, MathError::ArithmeticOverflow);
safe_arith!(safe_sub_u128, u128, checked_sub, MathError::ArithmeticUnderflow);
safe_arith!(safe_mul_u128, u128, checked_mul, MathError::ArithmeticOverflow);
safe_arith!(div, safe_div_u128, u128, 0);

// ============================================================================
// Casts
// ============================================================================

/// Narrow to the uint160 range; the value stays a `U256`
pub fn to_uint160(value: U256) -> MathResult<U256> {
    if value > U160_MAX {
        return Err(MathError::CastOverflow);
    }
    Ok(value)
}

/// Narrow to u128
pub fn to_uint128(value: U256) -> MathResult<u128> {
    let (hi, lo) = value.into_words();
    if hi != 0 {
        return Err(MathError::CastOverflow);
    }
    Ok(lo)
}

/// Narrow a signed 256-bit value to i128
pub fn to_int128(value: I256) -> MathResult<i128> {
    if value > I256::new(i128::MAX) || value < I256::new(i128::MIN) {
        return Err(MathError::CastOverflow);
    }
    Ok(value.as_i128())
}

/// Convert u128 to i128, failing above `i128::MAX`
pub fn to_int128_from_unsigned(value: u128) -> MathResult<i128> {
    i128::try_from(value).map_err(|_| MathError::CastOverflow)
}

/// Convert U256 to I256, failing at or above 2^255
pub fn to_int256(value: U256) -> MathResult<I256> {
    if value > I256::MAX.as_u256() {
        return Err(MathError::CastOverflow);
    }
    Ok(value.as_i256())
}
