//! # Fee Types
//!
//! Parameters of the adaptive fee curve.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::errors::{CoreResult, IntegralCoreError};

/// Adaptive fee curve parameters
///
/// Two sigmoids over volatility (`alpha1/beta1/gamma1` and
/// `alpha2/beta2/gamma2`) on top of `base_fee`, optionally blended by a
/// third sigmoid over volume. Replaced wholesale on reconfiguration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeConfiguration {
    /// Max value of the first sigmoid
    pub alpha1: u16,
    /// Max value of the second sigmoid
    pub alpha2: u16,
    /// Shift along the x-axis for the first sigmoid
    pub beta1: u32,
    /// Shift along the x-axis for the second sigmoid
    pub beta2: u32,
    /// Horizontal stretch factor for the first sigmoid
    pub gamma1: u16,
    /// Horizontal stretch factor for the second sigmoid
    pub gamma2: u16,
    /// Shift along the x-axis for the volume sigmoid
    pub volume_beta: u32,
    /// Horizontal stretch factor for the volume sigmoid
    pub volume_gamma: u16,
    /// Minimum fee
    pub base_fee: u16,
}

impl Default for FeeConfiguration {
    fn default() -> Self {
        Self {
            alpha1: DEFAULT_ALPHA1,
            alpha2: DEFAULT_ALPHA2,
            beta1: DEFAULT_BETA1,
            beta2: DEFAULT_BETA2,
            gamma1: DEFAULT_GAMMA1,
            gamma2: DEFAULT_GAMMA2,
            volume_beta: DEFAULT_VOLUME_BETA,
            volume_gamma: DEFAULT_VOLUME_GAMMA,
            base_fee: DEFAULT_BASE_FEE,
        }
    }
}

impl FeeConfiguration {
    /// Reject zero gammas and curves whose maximum exceeds the fee type
    pub fn validate(&self) -> CoreResult<()> {
        if self.gamma1 == 0 || self.gamma2 == 0 || self.volume_gamma == 0 {
            return Err(IntegralCoreError::InvalidFeeConfiguration(
                "gammas must be greater than 0",
            ));
        }

        if self.max_fee() > MAX_FEE as u32 {
            return Err(IntegralCoreError::InvalidFeeConfiguration(
                "alpha1 + alpha2 + base_fee exceeds the maximum fee",
            ));
        }

        Ok(())
    }

    /// Fee at the top of the curve
    pub fn max_fee(&self) -> u32 {
        self.alpha1 as u32 + self.alpha2 as u32 + self.base_fee as u32
    }
}
