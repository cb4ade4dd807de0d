//! # Adaptive Fee
//!
//! Fee as a sum of sigmoids over volatility, optionally blended by volume:
//!
//! ```text
//! sigmoid(x) = alpha / (1 + e^((beta - x) / gamma))
//! fee = base_fee + sigmoid1(volatility) + sigmoid2(volatility)
//! ```
//!
//! Each sigmoid is pinned to `0` or `alpha` once `x` is at least six gammas
//! from `beta`, so the exponential only ever sees arguments in `[0, 6)`.

use ethnum::U256;
use integral_math::{mul_div, to_uint128, MathError, MathResult};
use tracing::info;

use crate::constants::{EXP_SCALE, MAX_FEE, SIGMOID_CUTOFF_GAMMAS};
use crate::errors::CoreResult;
use crate::types::FeeConfiguration;

/// e^k for k = 0..=5, scaled by `EXP_SCALE`
const EXP_POWERS: [u128; 6] = [
    100_000_000_000_000_000_000,
    271_828_182_845_904_523_536,
    738_905_609_893_065_022_723,
    2_008_553_692_318_766_774_092,
    5_459_815_003_314_423_907_811,
    14_841_315_910_257_660_342_111,
];

/// e^0.5 scaled by `EXP_SCALE`
const EXP_HALF: u128 = 164_872_127_070_012_814_684;

// ============================================================================
// Exponential Approximation
// ============================================================================

/// e^(x / g) scaled by `EXP_SCALE`, for `x < 6 * g`
///
/// The whole part of `x / g` comes from a table and a half step, the
/// remaining fraction `t < 0.5` from `1 + t + t^2/2 + t^3/6 + t^4/24`.
/// The series undershoots and the table rows are exact, so the result is
/// non-decreasing in `x`. Relative error is below 5e-4.
pub fn exp_ratio(x: u128, g: u16) -> MathResult<U256> {
    if g == 0 {
        return Err(MathError::DivisionByZero);
    }
    let g = g as u128;

    let whole = x / g;
    if whole >= EXP_POWERS.len() as u128 {
        return Err(MathError::ArithmeticOverflow);
    }
    let mut closest = U256::new(EXP_POWERS[whole as usize]);

    // Fraction as y / (2g) so the half step stays exact for odd g
    let remainder = x % g;
    let y = if 2 * remainder >= g {
        closest = mul_div(closest, U256::new(EXP_HALF), U256::new(EXP_SCALE))?;
        2 * remainder - g
    } else {
        2 * remainder
    };

    let d = U256::new(2 * g);
    let y = U256::new(y);
    let d2 = d * d;
    let d3 = d2 * d;
    let d4 = d3 * d;
    let y2 = y * y;

    // 24 * d^4 * (1 + t + t^2/2 + t^3/6 + t^4/24) with t = y / d
    let series = U256::new(24) * d4
        + U256::new(24) * y * d3
        + U256::new(12) * y2 * d2
        + U256::new(4) * y2 * y * d
        + y2 * y2;

    mul_div(series, closest, U256::new(24) * d4)
}

// ============================================================================
// Sigmoid
// ============================================================================

/// `alpha / (1 + e^((beta - x) / g))`, rounded down
///
/// A zero `g` is a step at `beta` of zero width, so the result is pinned
/// to `alpha`.
pub fn sigmoid(x: u128, g: u16, alpha: u16, beta: u32) -> MathResult<u16> {
    if g == 0 {
        return Ok(alpha);
    }

    let cutoff = SIGMOID_CUTOFF_GAMMAS * g as u128;
    let beta = beta as u128;
    let alpha_wide = U256::new(alpha as u128);
    let scale = U256::new(EXP_SCALE);

    let result = if x > beta {
        let distance = x - beta;
        if distance >= cutoff {
            return Ok(alpha);
        }
        // alpha * e^d / (1 + e^d)
        let ex = exp_ratio(distance, g)?;
        mul_div(alpha_wide, ex, scale + ex)?
    } else {
        let distance = beta - x;
        if distance >= cutoff {
            return Ok(0);
        }
        // alpha / (1 + e^d)
        let ex = exp_ratio(distance, g)?;
        mul_div(alpha_wide, scale, scale + ex)?
    };

    // Bounded by alpha
    u16::try_from(to_uint128(result)?).map_err(|_| MathError::CastOverflow)
}

// ============================================================================
// Fee Curve
// ============================================================================

fn saturate_fee(fee: u32) -> u16 {
    u16::try_from(fee).unwrap_or(MAX_FEE)
}

/// Sum of both volatility sigmoids
fn volatility_premium(volatility: u128, config: &FeeConfiguration) -> MathResult<u32> {
    let sigma1 = sigmoid(volatility, config.gamma1, config.alpha1, config.beta1)?;
    let sigma2 = sigmoid(volatility, config.gamma2, config.alpha2, config.beta2)?;
    Ok(sigma1 as u32 + sigma2 as u32)
}

/// Volatility-only fee: `base_fee + sigma1 + sigma2`
pub fn get_fee(volatility: u128, config: &FeeConfiguration) -> MathResult<u16> {
    let premium = volatility_premium(volatility, config)?;
    Ok(saturate_fee(config.base_fee as u32 + premium))
}

/// Fee with the volatility premium blended by a volume sigmoid
///
/// The premium becomes the volume sigmoid's asymptote, so low volume damps
/// the volatility response.
pub fn get_fee_with_volume(
    volatility: u128,
    volume_per_liquidity: u128,
    config: &FeeConfiguration,
) -> MathResult<u16> {
    let premium = saturate_fee(volatility_premium(volatility, config)?);
    let blended = sigmoid(
        volume_per_liquidity,
        config.volume_gamma,
        premium,
        config.volume_beta,
    )?;
    Ok(saturate_fee(config.base_fee as u32 + blended as u32))
}

// ============================================================================
// Engine
// ============================================================================

/// Adaptive fee curve bound to a validated configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdaptiveFeeEngine {
    config: FeeConfiguration,
}

impl AdaptiveFeeEngine {
    pub fn new(config: FeeConfiguration) -> CoreResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &FeeConfiguration {
        &self.config
    }

    /// Fee for the given volatility
    pub fn fee(&self, volatility: u128) -> CoreResult<u16> {
        Ok(get_fee(volatility, &self.config)?)
    }

    /// Fee for the given volatility and volume per liquidity
    pub fn fee_with_volume(&self, volatility: u128, volume_per_liquidity: u128) -> CoreResult<u16> {
        Ok(get_fee_with_volume(volatility, volume_per_liquidity, &self.config)?)
    }

    /// Replace the whole configuration; the old one stays on failure
    pub fn reconfigure(&mut self, config: FeeConfiguration) -> CoreResult<()> {
        config.validate()?;
        info!(
            alpha1 = config.alpha1,
            alpha2 = config.alpha2,
            base_fee = config.base_fee,
            "Adaptive fee reconfigured"
        );
        self.config = config;
        Ok(())
    }
}
