//! # Integral Core - Fee and Reward Engines
//!
//! Pricing and incentive logic shared by every pool, plugin and farming
//! contract. Built on the fixed-point primitives in `integral-math`.
//!
//! - Adaptive fee: sigmoid fee curve over volatility and volume
//! - Sliding fee: directional fee factors tracking recent price moves
//! - Reward math: time-weighted farming reward allocation
//! - Configuration loading and the per-pool registry

pub mod config;
pub mod constants;
pub mod errors;
pub mod farming;
pub mod fees;
pub mod registry;
pub mod types;

// Re-export commonly used items
pub use config::EngineConfig;
pub use constants::*;
pub use errors::{CoreResult, IntegralCoreError};
pub use farming::*;
pub use fees::*;
pub use registry::{PoolId, PoolRegistry};
pub use types::*;
