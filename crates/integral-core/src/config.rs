//! # Engine Configuration
//!
//! TOML configuration for the fee engines. Missing sections and fields
//! fall back to the defaults.
//!
//! ```toml
//! [adaptive_fee]
//! alpha1 = 2900
//! alpha2 = 12000
//! beta1 = 360
//! beta2 = 60000
//! gamma1 = 59
//! gamma2 = 8500
//! volume_beta = 0
//! volume_gamma = 10
//! base_fee = 100
//!
//! [sliding_fee]
//! base_fee = 500
//! price_change_factor = 1000
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CoreResult, IntegralCoreError};
use crate::fees::{AdaptiveFeeEngine, SlidingFeeEngine};
use crate::types::{FeeConfiguration, SlidingFeeConfig};

/// Fee engine configuration loaded from a TOML file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Adaptive fee curve
    pub adaptive_fee: FeeConfiguration,

    /// Sliding fee parameters applied to newly registered pools
    pub sliding_fee: SlidingFeeConfig,
}

impl EngineConfig {
    /// Load and validate configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            IntegralCoreError::config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml_str(content: &str) -> CoreResult<Self> {
        let config: EngineConfig = toml::from_str(content)
            .map_err(|e| IntegralCoreError::config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml_string(&self) -> CoreResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| IntegralCoreError::config(format!("Failed to serialize config: {}", e)))
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> CoreResult<()> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        fs::write(path, content).map_err(|e| {
            IntegralCoreError::config(format!(
                "Failed to write config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> CoreResult<()> {
        self.adaptive_fee.validate()?;
        self.sliding_fee.validate()?;
        Ok(())
    }

    /// Adaptive fee engine for this configuration
    pub fn adaptive_fee_engine(&self) -> CoreResult<AdaptiveFeeEngine> {
        AdaptiveFeeEngine::new(self.adaptive_fee)
    }

    /// Sliding fee engine for this configuration at neutral factors
    pub fn sliding_fee_engine(&self) -> CoreResult<SlidingFeeEngine> {
        SlidingFeeEngine::new(self.sliding_fee)
    }
}
