//! # Tick Math
//!
//! Tick to sqrt price conversion in Q64.96: sqrt(1.0001^tick) * 2^96.

use ethnum::U256;

use crate::constants::{MAX_TICK, MIN_TICK};
use crate::errors::{MathError, MathResult};

/// sqrt(1.0001)^-(2^i) in Q128.128 for i = 1..=19
const SQRT_1_0001_INV_POW_2_X128: [u128; 19] = [
    0xfff97272373d413259a46990580e213a,
    0xfff2e50f5f656932ef12357cf3c7fdcc,
    0xffe5caca7e10e4e61c3624eaa0941cd0,
    0xffcb9843d60f6159c9db58835c926644,
    0xff973b41fa98c081472e6896dfb254c0,
    0xff2ea16466c96a3843ec78b326b52861,
    0xfe5dee046a99a2a811c461f1969c3053,
    0xfcbe86c7900a88aedcffc83b479aa3a4,
    0xf987a7253ac413176f2b074cf7815e54,
    0xf3392b0822b70005940c7a398e4b70f3,
    0xe7159475a2c29b7443b29c7fa6e889d9,
    0xd097f3bdfd2022b8845ad8f792aa5825,
    0xa9f746462d870fdf8a65dc1f90e061e5,
    0x70d869a156d2a1b890bb3df62baf32f7,
    0x31be135f97d08fd981231505542fcfa6,
    0x9aa508b5b7a84e1c677de54f3e99bc9,
    0x5d6af8dedb81196699c329225ee604,
    0x2216e584f5fa1ea926041bedfe98,
    0x48a170391f7dc42444e8fa2,
];

/// sqrt(1.0001)^-1 in Q128.128
const SQRT_1_0001_INV_X128: u128 = 0xfffcb933bd6fad37aa2d162d1a594001;

/// Calculate sqrt(1.0001^tick) * 2^96
///
/// Fails with `TickOutOfRange` if `|tick| > MAX_TICK`.
pub fn get_sqrt_ratio_at_tick(tick: i32) -> MathResult<U256> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(MathError::TickOutOfRange);
    }

    let abs_tick = tick.unsigned_abs();

    let mut ratio = if abs_tick & 0x1 != 0 {
        U256::new(SQRT_1_0001_INV_X128)
    } else {
        U256::from_words(1, 0)
    };

    // MAX_TICK < 2^20, so bits 1..=19 cover every tick
    for (i, factor) in SQRT_1_0001_INV_POW_2_X128.iter().enumerate() {
        if abs_tick & (1 << (i + 1)) != 0 {
            // ratio <= 2^128 and factor < 2^128, the product fits in 256 bits
            ratio = (ratio * U256::new(*factor)) >> 128u32;
        }
    }

    if tick > 0 {
        ratio = U256::MAX / ratio;
    }

    // Q128.128 to Q128.96, rounding up
    let rounding = if ratio & U256::new(0xffff_ffff) != U256::ZERO {
        U256::ONE
    } else {
        U256::ZERO
    };
    Ok((ratio >> 32u32) + rounding)
}
