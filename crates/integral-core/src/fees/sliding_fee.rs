//! # Sliding Fee
//!
//! Directional fee factors that drift with price. A rise in price makes
//! the one-to-zero direction more expensive and the zero-to-one direction
//! cheaper by the same amount; a fall does the reverse.
//!
//! For a tick move `d = current_tick - last_tick`:
//!
//! ```text
//! impact = sign(d) * (sqrt(1.0001^|d|) - 1) * price_change_factor / 1000
//! one_to_zero += impact
//! zero_to_one -= impact
//! ```
//!
//! Factors are Q96 and clamp to `[0, 2.0]`; once one side would leave the
//! range the pair snaps to `(2.0, 0)` or `(0, 2.0)`.

use ethnum::{I256, U256};
use integral_math::{
    get_sqrt_ratio_at_tick, mul_div, safe_add_i256, to_int256, to_uint128, MathError,
    MathResult, MAX_TICK, Q96, RESOLUTION_96,
};
use tracing::{debug, info};

use crate::constants::{MAX_FEE_FACTOR, PRICE_CHANGE_FACTOR_DENOMINATOR};
use crate::errors::CoreResult;
use crate::types::{FeeFactors, SlidingFeeConfig};

/// Signed Q96 shift of `one_to_zero` for a tick move
///
/// Equal and opposite moves give exactly opposite impacts.
pub fn price_impact(
    current_tick: i32,
    last_tick: i32,
    price_change_factor: u32,
) -> MathResult<I256> {
    let delta = current_tick as i64 - last_tick as i64;
    if delta == 0 {
        return Ok(I256::ZERO);
    }

    // Beyond MAX_TICK the ratio already saturates the clamp
    let distance = delta.unsigned_abs().min(MAX_TICK as u64) as i32;
    let ratio = get_sqrt_ratio_at_tick(distance)?;
    let magnitude = mul_div(
        ratio - U256::new(Q96),
        U256::new(price_change_factor as u128),
        U256::new(PRICE_CHANGE_FACTOR_DENOMINATOR as u128),
    )?;
    let magnitude = to_int256(magnitude)?;

    Ok(if delta > 0 { magnitude } else { -magnitude })
}

/// Apply an impact to a pair of factors, clamping at the bounds
pub fn apply_price_impact(factors: FeeFactors, impact: I256) -> MathResult<FeeFactors> {
    let one_to_zero = safe_add_i256(I256::from(factors.one_to_zero_fee_factor), impact)?;

    if one_to_zero >= I256::from(MAX_FEE_FACTOR) {
        debug!("One-to-zero fee factor clamped at upper bound");
        return Ok(FeeFactors {
            zero_to_one_fee_factor: 0,
            one_to_zero_fee_factor: MAX_FEE_FACTOR,
        });
    }
    if one_to_zero <= I256::ZERO {
        debug!("One-to-zero fee factor clamped at lower bound");
        return Ok(FeeFactors {
            zero_to_one_fee_factor: MAX_FEE_FACTOR,
            one_to_zero_fee_factor: 0,
        });
    }

    let one_to_zero = one_to_zero.as_u128();
    Ok(FeeFactors {
        zero_to_one_fee_factor: MAX_FEE_FACTOR - one_to_zero,
        one_to_zero_fee_factor: one_to_zero,
    })
}

/// `base_fee * factor >> 96`
pub fn directional_fee(base_fee: u16, factor: u128) -> MathResult<u16> {
    let fee = mul_div(
        U256::new(base_fee as u128),
        U256::new(factor),
        U256::ONE << RESOLUTION_96,
    )?;
    u16::try_from(to_uint128(fee)?).map_err(|_| MathError::CastOverflow)
}

/// Per-pool sliding fee state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlidingFeeEngine {
    config: SlidingFeeConfig,
    factors: FeeFactors,
}

impl SlidingFeeEngine {
    /// New engine at neutral factors
    pub fn new(config: SlidingFeeConfig) -> CoreResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            factors: FeeFactors::neutral(),
        })
    }

    pub fn config(&self) -> &SlidingFeeConfig {
        &self.config
    }

    pub fn factors(&self) -> FeeFactors {
        self.factors
    }

    /// Replace the configuration, keeping the current factors
    pub fn set_config(&mut self, config: SlidingFeeConfig) -> CoreResult<()> {
        config.validate()?;
        info!(
            base_fee = config.base_fee,
            price_change_factor = config.price_change_factor,
            "Sliding fee reconfigured"
        );
        self.config = config;
        Ok(())
    }

    /// Restore neutral factors
    pub fn reset(&mut self) {
        self.factors = FeeFactors::neutral();
    }

    /// Factors after a move from `last_tick` to `current_tick`, without
    /// storing them
    pub fn calculate_fee_factors(&self, current_tick: i32, last_tick: i32) -> CoreResult<FeeFactors> {
        if current_tick == last_tick {
            return Ok(self.factors);
        }
        let impact = price_impact(current_tick, last_tick, self.config.price_change_factor)?;
        Ok(apply_price_impact(self.factors, impact)?)
    }

    /// Fee for a swap in the given direction at the stored factors
    pub fn fee_for_direction(&self, zero_to_one: bool) -> CoreResult<u16> {
        Ok(directional_fee(
            self.config.base_fee,
            self.factors.for_direction(zero_to_one),
        )?)
    }

    /// Update the factors for the price move, then price the swap
    ///
    /// Nothing is stored if any step fails.
    pub fn get_fee_and_update_factors(
        &mut self,
        zero_to_one: bool,
        current_tick: i32,
        last_tick: i32,
    ) -> CoreResult<u16> {
        let factors = self.calculate_fee_factors(current_tick, last_tick)?;
        let fee = directional_fee(self.config.base_fee, factors.for_direction(zero_to_one))?;

        if factors != self.factors {
            debug!(
                current_tick,
                last_tick,
                zero_to_one = factors.zero_to_one_fee_factor,
                one_to_zero = factors.one_to_zero_fee_factor,
                "Fee factors updated"
            );
        }
        self.factors = factors;

        Ok(fee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(price_change_factor: u32) -> SlidingFeeEngine {
        SlidingFeeEngine::new(SlidingFeeConfig {
            base_fee: 500,
            price_change_factor,
        })
        .unwrap()
    }

    #[test]
    fn test_same_tick_keeps_factors() {
        let mut engine = engine(1000);
        let fee = engine.get_fee_and_update_factors(true, 100, 100).unwrap();
        assert_eq!(fee, 500);
        assert_eq!(engine.factors(), FeeFactors::neutral());
    }

    #[test]
    fn test_impact_is_antisymmetric() {
        for delta in [1, 17, 13_863, 200_000] {
            let up = price_impact(delta, 0, 1000).unwrap();
            let down = price_impact(0, delta, 1000).unwrap();
            assert!(up > I256::ZERO);
            assert_eq!(up, -down);
        }
    }

    #[test]
    fn test_price_increase_direction() {
        let mut engine = engine(1000);
        engine.get_fee_and_update_factors(false, 100, 0).unwrap();
        let factors = engine.factors();
        assert!(factors.one_to_zero_fee_factor > Q96);
        assert!(factors.zero_to_one_fee_factor < Q96);
        assert_eq!(
            factors.one_to_zero_fee_factor + factors.zero_to_one_fee_factor,
            MAX_FEE_FACTOR
        );
        assert!(engine.fee_for_direction(false).unwrap() > 500);
        assert!(engine.fee_for_direction(true).unwrap() < 500);
    }

    #[test]
    fn test_clamps() {
        let up = apply_price_impact(FeeFactors::neutral(), I256::from(Q96)).unwrap();
        assert_eq!(up.one_to_zero_fee_factor, MAX_FEE_FACTOR);
        assert_eq!(up.zero_to_one_fee_factor, 0);

        let down = apply_price_impact(FeeFactors::neutral(), -I256::from(Q96)).unwrap();
        assert_eq!(down.one_to_zero_fee_factor, 0);
        assert_eq!(down.zero_to_one_fee_factor, MAX_FEE_FACTOR);
    }

    #[test]
    fn test_clamps_logged_at_debug() {
        use std::io;
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<u8>>>);

        impl io::Write for Captured {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            apply_price_impact(FeeFactors::neutral(), I256::from(Q96)).unwrap();
            apply_price_impact(FeeFactors::neutral(), -I256::from(Q96)).unwrap();
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<&str> = output.lines().filter(|line| line.contains("clamped")).collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("DEBUG") && lines[0].contains("upper bound"));
        assert!(lines[1].contains("DEBUG") && lines[1].contains("lower bound"));
    }

    #[test]
    fn test_extreme_tick_move_clamps() {
        let mut engine = engine(1000);
        engine
            .get_fee_and_update_factors(true, i32::MAX, i32::MIN)
            .unwrap();
        assert_eq!(engine.factors().one_to_zero_fee_factor, MAX_FEE_FACTOR);
        assert_eq!(engine.fee_for_direction(false).unwrap(), 1000);
        assert_eq!(engine.fee_for_direction(true).unwrap(), 0);
    }

    #[test]
    fn test_reset_and_set_config() {
        let mut engine = engine(1000);
        engine.get_fee_and_update_factors(true, -500, 0).unwrap();
        let moved = engine.factors();
        assert_ne!(moved, FeeFactors::neutral());

        engine
            .set_config(SlidingFeeConfig { base_fee: 1000, price_change_factor: 500 })
            .unwrap();
        assert_eq!(engine.factors(), moved);
        assert!(engine
            .set_config(SlidingFeeConfig { base_fee: 40_000, price_change_factor: 500 })
            .is_err());
        assert_eq!(engine.config().base_fee, 1000);

        engine.reset();
        assert_eq!(engine.factors(), FeeFactors::neutral());
        assert_eq!(engine.fee_for_direction(true).unwrap(), 1000);
    }
}
