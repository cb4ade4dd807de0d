//! Shared helpers for integral-core integration tests

#![allow(dead_code)]

pub mod tracing;

use integral_core::FeeConfiguration;

/// Closed-form sigmoid with the same six-gamma cutoffs as the engine
pub fn reference_sigmoid(x: f64, gamma: f64, alpha: f64, beta: f64) -> f64 {
    if gamma == 0.0 || x - beta >= 6.0 * gamma {
        return alpha;
    }
    if beta - x >= 6.0 * gamma {
        return 0.0;
    }
    alpha / (1.0 + ((beta - x) / gamma).exp())
}

/// Closed-form volatility-only fee
pub fn reference_fee(volatility: f64, config: &FeeConfiguration) -> f64 {
    config.base_fee as f64
        + reference_sigmoid(
            volatility,
            config.gamma1 as f64,
            config.alpha1 as f64,
            config.beta1 as f64,
        )
        + reference_sigmoid(
            volatility,
            config.gamma2 as f64,
            config.alpha2 as f64,
            config.beta2 as f64,
        )
}
