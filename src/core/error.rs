//! Errors raised by the calculator core.

use thiserror::Error;

/// Errors that can occur while evaluating calculator events.
///
/// Division by zero is the only failure the state machine knows about.
/// Malformed display text is coerced to zero instead of failing.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum CalcError {
    #[error("Division by zero (dividend: {dividend})")]
    DivisionByZero { dividend: f64 },
}

/// Errors produced when mapping button labels or characters to inputs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseKeyError {
    #[error("Unknown input character '{0}'")]
    UnknownChar(char),

    #[error("Digit {0} is out of range 0-9")]
    DigitOutOfRange(u8),

    #[error("Unknown key label '{0}'")]
    UnknownLabel(String),
}
