//! Conceptual phases of the calculator.
//!
//! A phase is never stored; it is derived from the pending operation and
//! the reset flag, so it cannot drift out of sync with the state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the calculator is in a computation.
///
/// # Example
///
/// ```rust
/// use tally::core::{Calculator, InputToken, Operator, Phase};
///
/// let calc = Calculator::new().enter_digit(InputToken::digit(5).unwrap());
/// assert_eq!(calc.phase(), Phase::EnteringOperand);
///
/// let calc = calc.apply_operation(Operator::Add).unwrap();
/// assert_eq!(calc.phase(), Phase::AwaitingOperand);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// Digits typed so far are being collected into an operand.
    EnteringOperand,
    /// An operator was pressed and is shown; the next digit starts the
    /// second operand.
    AwaitingOperand,
    /// A result (from `=` or reused from history) is shown.
    ResultDisplayed,
}

impl Phase {
    /// Derive the phase from the pieces of calculator state that define it.
    pub fn derive(has_pending_operation: bool, reset_on_next_digit: bool) -> Self {
        match (has_pending_operation, reset_on_next_digit) {
            (true, true) => Self::AwaitingOperand,
            (false, true) => Self::ResultDisplayed,
            (_, false) => Self::EnteringOperand,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::EnteringOperand => "EnteringOperand",
            Self::AwaitingOperand => "AwaitingOperand",
            Self::ResultDisplayed => "ResultDisplayed",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
