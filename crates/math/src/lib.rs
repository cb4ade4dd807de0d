//! # Integral Math
//!
//! Checked fixed-point arithmetic shared by every pool, plugin and farming
//! component:
//!
//! - Overflow-checked arithmetic and range-checked casts
//! - Full-precision 256-bit multiply-divide with floor/ceil rounding
//! - Most/least significant bit search
//! - Signed liquidity delta addition
//! - Tick to sqrt price conversion
//!
//! All operations are pure and never wrap silently.

pub mod bit_math;
pub mod constants;
pub mod errors;
pub mod full_math;
pub mod liquidity_math;
pub mod safe_math;
pub mod tick_math;

// Re-export commonly used items
pub use bit_math::*;
pub use constants::*;
pub use errors::{MathError, MathResult};
pub use full_math::*;
pub use liquidity_math::*;
pub use safe_math::*;
pub use tick_math::*;

pub use ethnum::{I256, U256};
