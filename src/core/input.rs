//! Input tokens and the discrete UI events a presentation layer forwards.

use super::error::ParseKeyError;
use super::operator::Operator;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A decimal digit, `0` through `9`.
///
/// The value is checked on construction, so an out-of-range digit cannot
/// exist, including one read back through serde.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Build a digit, `None` when `d > 9`.
    pub fn new(d: u8) -> Option<Self> {
        (d <= 9).then_some(Self(d))
    }

    /// The digit as a number.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The digit as an ASCII character.
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = ParseKeyError;

    fn try_from(d: u8) -> Result<Self, Self::Error> {
        Self::new(d).ok_or(ParseKeyError::DigitOutOfRange(d))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// A single digit-entry token: a [`Digit`] or the decimal point.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum InputToken {
    Digit(Digit),
    Point,
}

impl InputToken {
    /// Build a digit token, `None` when `d > 9`.
    pub fn digit(d: u8) -> Option<Self> {
        Digit::new(d).map(Self::Digit)
    }

    /// The character appended to the display for this token.
    pub fn as_char(&self) -> char {
        match self {
            Self::Digit(d) => d.as_char(),
            Self::Point => '.',
        }
    }

    /// Whether this is the decimal point.
    pub fn is_point(&self) -> bool {
        matches!(self, Self::Point)
    }
}

impl TryFrom<char> for InputToken {
    type Error = ParseKeyError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '.' => Ok(Self::Point),
            '0'..='9' => Ok(Self::Digit(Digit(c as u8 - b'0'))),
            other => Err(ParseKeyError::UnknownChar(other)),
        }
    }
}

/// One press on the calculator's keypad (or history panel).
///
/// Each variant maps 1:1 to a transition on
/// [`Calculator`](super::Calculator).
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum Key {
    Digit(InputToken),
    Operation(Operator),
    Equals,
    /// `C`: reset the working state, keep history.
    Clear,
    /// `AC`: reset the working state and history.
    ClearAll,
    /// Seed a new computation with a past result.
    Reuse(#[serde(with = "crate::core::serde_float")] f64),
}

impl Key {
    /// Short label used in logs.
    pub fn label(&self) -> String {
        match self {
            Self::Digit(token) => token.as_char().to_string(),
            Self::Operation(op) => op.to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::ClearAll => "AC".to_string(),
            Self::Reuse(value) => format!("reuse({value})"),
        }
    }
}

impl From<InputToken> for Key {
    fn from(token: InputToken) -> Self {
        Self::Digit(token)
    }
}

impl From<Operator> for Key {
    fn from(op: Operator) -> Self {
        Self::Operation(op)
    }
}

/// Parse a button label: `0`-`9`, `.`, `+ - * /`, `=`, `C` or `AC`.
///
/// [`Key::Reuse`] has no label; it is raised from the history panel.
impl FromStr for Key {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        if label.eq_ignore_ascii_case("ac") {
            return Ok(Self::ClearAll);
        }
        if label.eq_ignore_ascii_case("c") {
            return Ok(Self::Clear);
        }
        if label == "=" {
            return Ok(Self::Equals);
        }

        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => InputToken::try_from(c)
                .map(Self::Digit)
                .or_else(|_| Operator::try_from(c).map(Self::Operation))
                .map_err(|_| ParseKeyError::UnknownLabel(s.to_string())),
            _ => Err(ParseKeyError::UnknownLabel(s.to_string())),
        }
    }
}

/// Parse a whitespace-separated run of button labels, e.g. `"5 + 3 ="`.
pub fn parse_keys(input: &str) -> Result<Vec<Key>, ParseKeyError> {
    input.split_whitespace().map(str::parse).collect()
}
