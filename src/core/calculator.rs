//! The calculator state record and its pure transitions.

use super::error::CalcError;
use super::history::{HistoryEntry, HistoryLog};
use super::input::{InputToken, Key};
use super::number::{format_number, parse_display};
use super::operator::{apply, Operator};
use super::phase::Phase;
use super::settings::Settings;
use serde::{Deserialize, Serialize};

const INITIAL_DISPLAY: &str = "0";

/// Complete state of one calculator instance.
///
/// Every transition is a pure function: it takes `&self` and returns the
/// next state, leaving the receiver untouched. Transitions that can fail
/// (only division by zero) return `Result` and produce no new state on
/// failure, so the caller simply keeps the previous one.
///
/// # Example
///
/// ```rust
/// use tally::core::{Calculator, InputToken, Operator};
///
/// let calc = Calculator::new()
///     .enter_digit(InputToken::digit(5).unwrap())
///     .apply_operation(Operator::Add)
///     .unwrap();
/// assert_eq!(calc.display(), "+");
///
/// let calc = calc.enter_digit(InputToken::digit(3).unwrap()).equals().unwrap();
/// assert_eq!(calc.display(), "8");
/// assert_eq!(calc.history().last().unwrap().expression(), "5 + 3");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Calculator {
    display: String,
    #[serde(with = "crate::core::serde_float")]
    value: f64,
    #[serde(with = "crate::core::serde_float::option")]
    pending_value: Option<f64>,
    pending_operation: Option<Operator>,
    reset_on_next_digit: bool,
    history: HistoryLog,
    settings: Settings,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator in its initial configuration with default settings.
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create a calculator in its initial configuration.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            value: 0.0,
            pending_value: None,
            pending_operation: None,
            reset_on_next_digit: false,
            history: HistoryLog::new(),
            settings,
        }
    }

    /// Text currently shown: a number, or the operator awaiting its operand.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Working value: what the display holds, or the latest result.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Left operand awaiting completion.
    pub fn pending_value(&self) -> Option<f64> {
        self.pending_value
    }

    /// Operator awaiting its second operand.
    pub fn pending_operation(&self) -> Option<Operator> {
        self.pending_operation
    }

    /// Whether the next digit replaces the display instead of appending.
    pub fn resets_on_next_digit(&self) -> bool {
        self.reset_on_next_digit
    }

    /// Completed computations, most recent last.
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Settings this calculator was built with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Conceptual phase, derived from the pending operation and reset flag.
    pub fn phase(&self) -> Phase {
        Phase::derive(self.pending_operation.is_some(), self.reset_on_next_digit)
    }

    /// Type a digit or the decimal point.
    ///
    /// After an operator or a result the token starts a fresh number
    /// (`.` starts `"0."`). Otherwise a second `.` is ignored, a lone `"0"`
    /// is replaced rather than extended, and anything else is appended.
    pub fn enter_digit(&self, token: InputToken) -> Self {
        let mut next = self.clone();
        let c = token.as_char();

        if self.reset_on_next_digit {
            next.display = if token.is_point() {
                "0.".to_string()
            } else {
                c.to_string()
            };
            next.reset_on_next_digit = false;
        } else if token.is_point() {
            if self.display.contains('.') {
                return next;
            }
            next.display.push(c);
        } else if self.display == INITIAL_DISPLAY {
            next.display = c.to_string();
        } else {
            if self.settings.input_full(&self.display) {
                return next;
            }
            next.display.push(c);
        }

        next.value = parse_display(&next.display);
        next
    }

    /// Press an operator.
    ///
    /// The first operator stores the displayed number as the left operand.
    /// A further operator folds the pending operation into the left operand
    /// without touching history. Either way the operator symbol replaces the
    /// display until the next digit.
    pub fn apply_operation(&self, op: Operator) -> Result<Self, CalcError> {
        let input = parse_display(&self.display);
        let mut next = self.clone();

        match (self.pending_value, self.pending_operation) {
            (None, _) => next.pending_value = Some(input),
            (Some(left), Some(pending)) => {
                let result = apply(pending, left, input)?;
                next.pending_value = Some(result);
                next.value = result;
            }
            (Some(_), None) => {}
        }

        next.pending_operation = Some(op);
        next.display = op.symbol().to_string();
        next.reset_on_next_digit = true;
        Ok(next)
    }

    /// Press `=`.
    ///
    /// Does nothing unless an operation is pending. On success the
    /// expression is appended to history and its result is displayed.
    pub fn equals(&self) -> Result<Self, CalcError> {
        let (Some(left), Some(op)) = (self.pending_value, self.pending_operation) else {
            return Ok(self.clone());
        };

        let input = parse_display(&self.display);
        let result = apply(op, left, input)?;
        let expression = format!(
            "{} {} {}",
            format_number(left, None),
            op,
            format_number(input, None)
        );

        Ok(Self {
            display: format_number(result, self.settings.precision),
            value: result,
            pending_value: None,
            pending_operation: None,
            reset_on_next_digit: true,
            history: self.history.record(HistoryEntry::new(expression, result)),
            settings: self.settings,
        })
    }

    /// `C`: back to the initial configuration, history kept.
    pub fn clear(&self) -> Self {
        Self {
            history: self.history.clone(),
            ..Self::with_settings(self.settings)
        }
    }

    /// `AC`: back to the initial configuration with an empty history.
    pub fn clear_all(&self) -> Self {
        Self::with_settings(self.settings)
    }

    /// Seed a new computation with a past result.
    ///
    /// Any pending operation is dropped; the next digit starts a new number
    /// while the next operator uses `result` as its left operand.
    pub fn reuse(&self, result: f64) -> Self {
        Self {
            display: format_number(result, self.settings.precision),
            value: result,
            pending_value: None,
            pending_operation: None,
            reset_on_next_digit: true,
            history: self.history.clone(),
            settings: self.settings,
        }
    }

    /// Route a key press to its transition.
    pub fn handle(&self, key: Key) -> Result<Self, CalcError> {
        match key {
            Key::Digit(token) => Ok(self.enter_digit(token)),
            Key::Operation(op) => self.apply_operation(op),
            Key::Equals => self.equals(),
            Key::Clear => Ok(self.clear()),
            Key::ClearAll => Ok(self.clear_all()),
            Key::Reuse(result) => Ok(self.reuse(result)),
        }
    }
}
