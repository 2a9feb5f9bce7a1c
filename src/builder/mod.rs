//! Builder API for configuring calculators.
//!
//! This module provides a fluent builder that validates settings with
//! Stillwater's `Validation`, so every problem is reported in one pass.

pub mod calculator;
pub mod error;
pub mod rules;

pub use calculator::CalculatorBuilder;
pub use error::{BuildError, SettingsViolation};
pub use rules::validate_settings;
