//! # Farming
//!
//! Time-weighted reward allocation for farming incentives.

pub mod reward_math;

pub use reward_math::*;
