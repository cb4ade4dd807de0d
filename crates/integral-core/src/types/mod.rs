//! # Core Type Definitions
//!
//! Configuration and state shared by the fee and reward engines.

pub mod farming;
pub mod fees;
pub mod sliding;

// Re-export all types
pub use farming::*;
pub use fees::*;
pub use sliding::*;
