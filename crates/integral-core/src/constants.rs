//! # Protocol Constants
//!
//! Fee scale, fixed-point precision and default curve parameters.

// ============================================================================
// Fee Scale
// ============================================================================

/// Fee denominator: a fee of 100 is 0.01%
pub const FEE_DENOMINATOR: u32 = 1_000_000;

/// Largest fee representable by the fee type
pub const MAX_FEE: u16 = u16::MAX;

// ============================================================================
// Sliding Fee
// ============================================================================

/// Neutral directional factor (1.0 in Q96)
pub const NEUTRAL_FEE_FACTOR: u128 = integral_math::Q96;

/// Upper clamp for a directional factor (2.0 in Q96)
pub const MAX_FEE_FACTOR: u128 = 2 * integral_math::Q96;

/// Denominator of the price change factor (1000 = 1.0x drift)
pub const PRICE_CHANGE_FACTOR_DENOMINATOR: u32 = 1_000;

/// Default sliding base fee
pub const DEFAULT_SLIDING_BASE_FEE: u16 = 500;

/// Default price change factor
pub const DEFAULT_PRICE_CHANGE_FACTOR: u32 = 1_000;

// ============================================================================
// Adaptive Fee
// ============================================================================

/// Fixed-point scale of the exponential approximation (1e20 = 1.0)
pub const EXP_SCALE: u128 = 100_000_000_000_000_000_000;

/// Sigmoid terms saturate beyond this many gammas from beta
pub const SIGMOID_CUTOFF_GAMMAS: u128 = 6;

pub const DEFAULT_ALPHA1: u16 = 2900;
pub const DEFAULT_ALPHA2: u16 = 12000;
pub const DEFAULT_BETA1: u32 = 360;
pub const DEFAULT_BETA2: u32 = 60000;
pub const DEFAULT_GAMMA1: u16 = 59;
pub const DEFAULT_GAMMA2: u16 = 8500;
pub const DEFAULT_BASE_FEE: u16 = 100;
pub const DEFAULT_VOLUME_BETA: u32 = 0;
pub const DEFAULT_VOLUME_GAMMA: u16 = 10;
