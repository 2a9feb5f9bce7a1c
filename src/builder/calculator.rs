//! Builder for constructing calculators.

use crate::builder::error::BuildError;
use crate::builder::rules::validate_settings;
use crate::core::{Calculator, Settings};
use stillwater::validation::Validation;

/// Builder for configuring a calculator with a fluent API.
///
/// # Example
///
/// ```rust
/// use tally::builder::CalculatorBuilder;
///
/// let calc = CalculatorBuilder::new()
///     .max_input_digits(12)
///     .precision(10)
///     .build()
///     .unwrap();
///
/// assert_eq!(calc.display(), "0");
/// assert_eq!(calc.settings().precision, Some(10));
/// ```
#[derive(Debug, Default)]
pub struct CalculatorBuilder {
    settings: Settings,
}

impl CalculatorBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            settings: Settings::default(),
        }
    }

    /// Cap the digits accepted while typing a number (optional).
    pub fn max_input_digits(mut self, digits: usize) -> Self {
        self.settings.max_input_digits = Some(digits);
        self
    }

    /// Round displayed results to this many significant digits (optional).
    pub fn precision(mut self, digits: usize) -> Self {
        self.settings.precision = Some(digits);
        self
    }

    /// Start from existing settings, e.g. ones loaded by the host app.
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Build the calculator.
    /// Returns every settings violation at once if validation fails.
    pub fn build(self) -> Result<Calculator, BuildError> {
        match validate_settings(&self.settings) {
            Validation::Success(_) => Ok(Calculator::with_settings(self.settings)),
            Validation::Failure(errors) => Err(BuildError::InvalidSettings(
                errors.iter().cloned().collect(),
            )),
        }
    }
}
