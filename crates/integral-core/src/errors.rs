//! # Core Error Types
//!
//! Errors raised by the fee and reward engines. Arithmetic failures from
//! `integral-math` pass through unchanged so callers can still match on
//! the exact kind.

use integral_math::MathError;
use thiserror::Error;

use crate::registry::PoolId;

/// Core engine errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntegralCoreError {
    // ========================================================================
    // Math Errors
    // ========================================================================
    #[error(transparent)]
    Math(#[from] MathError),

    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid fee configuration: {0}")]
    InvalidFeeConfiguration(&'static str),

    #[error("Invalid parameter '{name}': got {value}, expected {expected}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        expected: &'static str,
    },

    // ========================================================================
    // Registry Errors
    // ========================================================================
    #[error("Pool not found: {0}")]
    PoolNotFound(PoolId),

    #[error("Pool lock poisoned: {0}")]
    PoolLockPoisoned(PoolId),

    #[error("Pool registry lock poisoned")]
    RegistryLockPoisoned,

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type using core errors
pub type CoreResult<T> = Result<T, IntegralCoreError>;

impl IntegralCoreError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(
        name: &'static str,
        value: impl ToString,
        expected: &'static str,
    ) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
            expected,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
