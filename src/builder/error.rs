//! Build errors for calculator construction.

use thiserror::Error;

/// A single problem found while validating calculator settings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettingsViolation {
    #[error("max_input_digits must be at least 1")]
    ZeroInputDigits,

    #[error("precision must be between 1 and {max} (got {found})")]
    PrecisionOutOfRange { found: usize, max: usize },
}

/// Errors that can occur when building a calculator.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid calculator settings: {}", join_violations(.0))]
    InvalidSettings(Vec<SettingsViolation>),
}

fn join_violations(violations: &[SettingsViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
