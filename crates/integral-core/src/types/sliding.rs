//! # Sliding Fee Types
//!
//! Directional fee factors and the parameters that drive them.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::errors::{CoreResult, IntegralCoreError};

/// Directional fee multipliers in Q96
///
/// Both start at 1.0 and always sum to 2.0: a move that raises one lowers
/// the other by the same amount. Each stays within `[0, 2.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeFactors {
    pub zero_to_one_fee_factor: u128,
    pub one_to_zero_fee_factor: u128,
}

impl FeeFactors {
    /// Both factors at 1.0
    pub const fn neutral() -> Self {
        Self {
            zero_to_one_fee_factor: NEUTRAL_FEE_FACTOR,
            one_to_zero_fee_factor: NEUTRAL_FEE_FACTOR,
        }
    }

    /// Factor applied to a swap in the given direction
    pub fn for_direction(&self, zero_to_one: bool) -> u128 {
        if zero_to_one {
            self.zero_to_one_fee_factor
        } else {
            self.one_to_zero_fee_factor
        }
    }
}

impl Default for FeeFactors {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Sliding fee parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlidingFeeConfig {
    /// Fee charged at neutral factors
    pub base_fee: u16,
    /// Drift speed, 1000 = 1.0x
    pub price_change_factor: u32,
}

impl Default for SlidingFeeConfig {
    fn default() -> Self {
        Self {
            base_fee: DEFAULT_SLIDING_BASE_FEE,
            price_change_factor: DEFAULT_PRICE_CHANGE_FACTOR,
        }
    }
}

impl SlidingFeeConfig {
    /// The fee at a fully raised factor must still fit the fee type
    pub fn validate(&self) -> CoreResult<()> {
        if 2 * self.base_fee as u32 > MAX_FEE as u32 {
            return Err(IntegralCoreError::invalid_parameter(
                "base_fee",
                self.base_fee,
                "at most 32767",
            ));
        }

        if self.price_change_factor == 0 {
            return Err(IntegralCoreError::invalid_parameter(
                "price_change_factor",
                0,
                "greater than 0",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_factors() {
        let factors = FeeFactors::default();
        assert_eq!(factors, FeeFactors::neutral());
        assert_eq!(factors.for_direction(true), 1u128 << 96);
        assert_eq!(factors.for_direction(false), 1u128 << 96);
    }

    #[test]
    fn test_sliding_config_validation() {
        assert!(SlidingFeeConfig::default().validate().is_ok());
        assert!(SlidingFeeConfig { base_fee: 32_767, ..Default::default() }
            .validate()
            .is_ok());
        assert!(SlidingFeeConfig { base_fee: 32_768, ..Default::default() }
            .validate()
            .is_err());
        assert!(matches!(
            SlidingFeeConfig { price_change_factor: 0, ..Default::default() }.validate(),
            Err(IntegralCoreError::InvalidParameter { name: "price_change_factor", .. })
        ));
    }
}
