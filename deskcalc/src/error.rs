//! Error types for the calculator engine

use thiserror::Error;

/// Failures while committing a pending operation.
///
/// The engine never hands these to the UI; it shows `"Error"` instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("not a number: {0:?}")]
    InvalidNumber(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("result is not a finite number")]
    Overflow,
}

pub type CalcResult<T> = Result<T, CalcError>;

/// Failures while turning a button label into a [`Token`](crate::Token).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("unknown button label: {0:?}")]
    Unknown(String),
    #[error("digit out of range: {0}")]
    DigitOutOfRange(u8),
}
