//! Settings validation using Validation.
//!
//! Every rule runs, and ALL violations are reported together instead of
//! stopping at the first one.

use crate::builder::error::SettingsViolation;
use crate::core::{Settings, MAX_PRECISION};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Check `settings`, accumulating every violation.
///
/// # Example
///
/// ```rust
/// use tally::builder::validate_settings;
/// use tally::core::Settings;
///
/// let settings = Settings {
///     max_input_digits: Some(0),
///     precision: Some(99),
/// };
/// assert!(validate_settings(&settings).is_failure());
/// assert!(validate_settings(&Settings::default()).is_success());
/// ```
pub fn validate_settings(settings: &Settings) -> Validation<(), NonEmptyVec<SettingsViolation>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<SettingsViolation>>> = Vec::new();

    if let Some(max) = settings.max_input_digits {
        let check = if max == 0 {
            Validation::fail(SettingsViolation::ZeroInputDigits)
        } else {
            Validation::success(())
        };
        checks.push(check);
    }

    if let Some(precision) = settings.precision {
        let check = if (1..=MAX_PRECISION).contains(&precision) {
            Validation::success(())
        } else {
            Validation::fail(SettingsViolation::PrecisionOutOfRange {
                found: precision,
                max: MAX_PRECISION,
            })
        };
        checks.push(check);
    }

    Validation::all_vec(checks).map(|_| ())
}
