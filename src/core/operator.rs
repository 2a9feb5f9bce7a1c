//! Binary operators and the pure arithmetic behind them.

use super::error::{CalcError, ParseKeyError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four binary operations a calculator offers.
///
/// Serializes as its symbol, so a history export reads `"+"` rather
/// than `"Add"`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    /// All operators in button order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// The symbol shown on the button and in the display.
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Operator {
    type Error = ParseKeyError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Subtract),
            '*' => Ok(Self::Multiply),
            '/' => Ok(Self::Divide),
            other => Err(ParseKeyError::UnknownChar(other)),
        }
    }
}

impl FromStr for Operator {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(ParseKeyError::UnknownLabel(s.to_string())),
        }
    }
}

/// Apply `op` to `a` and `b`.
///
/// Addition, subtraction and multiplication follow IEEE 754 semantics.
/// Dividing by zero (either sign) is refused: the error carries `a`
/// unchanged so the caller can keep its left operand.
///
/// # Example
///
/// ```rust
/// use tally::core::{apply, CalcError, Operator};
///
/// assert_eq!(apply(Operator::Add, 5.0, 3.0), Ok(8.0));
/// assert_eq!(
///     apply(Operator::Divide, 9.0, 0.0),
///     Err(CalcError::DivisionByZero { dividend: 9.0 })
/// );
/// ```
pub fn apply(op: Operator, a: f64, b: f64) -> Result<f64, CalcError> {
    match op {
        Operator::Add => Ok(a + b),
        Operator::Subtract => Ok(a - b),
        Operator::Multiply => Ok(a * b),
        Operator::Divide if b == 0.0 => Err(CalcError::DivisionByZero { dividend: a }),
        Operator::Divide => Ok(a / b),
    }
}
