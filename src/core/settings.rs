//! Tunable behavior of a calculator instance.

use serde::{Deserialize, Serialize};

/// Largest precision that still changes how an `f64` is rendered.
pub const MAX_PRECISION: usize = 17;

/// Settings carried by every [`Calculator`](super::Calculator).
///
/// The default is unlimited input and shortest round-trip formatting.
/// Build validated settings with
/// [`CalculatorBuilder`](crate::builder::CalculatorBuilder).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Maximum number of digits the display buffer accepts while typing.
    pub max_input_digits: Option<usize>,

    /// Significant digits results are rounded to before display.
    pub precision: Option<usize>,
}

impl Settings {
    /// Whether `text` already holds as many digits as allowed.
    pub fn input_full(&self, text: &str) -> bool {
        self.max_input_digits
            .is_some_and(|max| text.chars().filter(char::is_ascii_digit).count() >= max)
    }
}
