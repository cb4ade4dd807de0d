//! # Farming Types

use ethnum::U256;

use crate::errors::CoreResult;
use crate::farming::compute_reward_amount;

/// Remaining reward pool and active window of a farming incentive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncentiveRewardState {
    pub total_reward_unclaimed: U256,
    pub start_time: u64,
    pub end_time: u64,
}

impl IncentiveRewardState {
    /// Reward owed to a position for its accrued seconds inside range
    pub fn compute_reward(
        &self,
        liquidity: u128,
        total_liquidity: u128,
        inner_seconds_spent_per_liquidity_x128: U256,
    ) -> CoreResult<U256> {
        Ok(compute_reward_amount(
            self.total_reward_unclaimed,
            self.start_time,
            self.end_time,
            liquidity,
            total_liquidity,
            inner_seconds_spent_per_liquidity_x128,
        )?)
    }
}
