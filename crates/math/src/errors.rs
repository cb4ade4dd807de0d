//! # Math Errors
//!
//! Every failure of the arithmetic layer is a distinct, matchable kind.
//! None of them is transient: the enclosing economic action must abort.

use thiserror::Error;

/// Errors raised by the fixed-point arithmetic primitives
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("Arithmetic overflow")]
    ArithmeticOverflow,

    #[error("Arithmetic underflow")]
    ArithmeticUnderflow,

    #[error("Cast overflow")]
    CastOverflow,

    #[error("Division by zero")]
    DivisionByZero,

    /// The mul-div quotient does not fit in 256 bits
    #[error("Mul div overflow")]
    MulDivOverflow,

    #[error("Bit search on zero input")]
    ZeroInput,

    #[error("Liquidity add overflow")]
    LiquidityAdd,

    #[error("Liquidity sub underflow")]
    LiquiditySub,

    #[error("Tick out of range")]
    TickOutOfRange,
}

/// Result type using math errors
pub type MathResult<T> = Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(format!("{}", MathError::LiquidityAdd), "Liquidity add overflow");
        assert_eq!(format!("{}", MathError::LiquiditySub), "Liquidity sub underflow");
        assert_ne!(MathError::LiquidityAdd, MathError::LiquiditySub);
    }
}
