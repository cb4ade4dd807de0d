//! # Reward Math
//!
//! A position earns the share of the unclaimed reward equal to the share
//! of the incentive window it spent in range, weighted by its liquidity:
//!
//! ```text
//! reward = total_reward_unclaimed * seconds_inside_x128 / (duration << 128)
//! seconds_inside_x128 = inner_seconds_spent_per_liquidity_x128 * liquidity
//! ```

use ethnum::U256;
use integral_math::{mul_div, safe_mul_u256, MathError, MathResult, RESOLUTION_128};

/// Compute the reward owed to a position
///
/// A zero-length window accrues no time, so the reward falls back to the
/// position's liquidity share, which fails with `DivisionByZero` when
/// `total_liquidity` is zero. `end_time < start_time` fails with
/// `ArithmeticUnderflow`.
pub fn compute_reward_amount(
    total_reward_unclaimed: U256,
    start_time: u64,
    end_time: u64,
    liquidity: u128,
    total_liquidity: u128,
    inner_seconds_spent_per_liquidity_x128: U256,
) -> MathResult<U256> {
    let duration = end_time
        .checked_sub(start_time)
        .ok_or(MathError::ArithmeticUnderflow)?;

    if duration == 0 {
        return mul_div(
            total_reward_unclaimed,
            U256::new(liquidity),
            U256::new(total_liquidity),
        );
    }

    let seconds_inside_x128 =
        safe_mul_u256(inner_seconds_spent_per_liquidity_x128, U256::new(liquidity))?;
    let total_seconds_x128 = U256::new(duration as u128) << RESOLUTION_128;

    mul_div(total_reward_unclaimed, seconds_inside_x128, total_seconds_x128)
}
