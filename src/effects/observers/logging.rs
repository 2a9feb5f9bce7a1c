//! Logging presenter
//!
//! Maps session output to log levels:
//! - render → DEBUG (every key press)
//! - report → WARN (aborted key press)

use crate::core::{CalcError, Calculator};
use crate::effects::presenter::Presenter;
use tracing::{debug, warn};

/// Presenter that logs every render and error using tracing
#[derive(Clone, Debug, Default)]
pub struct LoggingPresenter;

impl LoggingPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Presenter for LoggingPresenter {
    fn render(&self, calculator: &Calculator) {
        debug!(
            display = %calculator.display(),
            phase = %calculator.phase(),
            pending = ?calculator.pending_value(),
            history_len = calculator.history().len(),
            "Display updated"
        );
    }

    fn report(&self, error: &CalcError) {
        warn!(error = %error, "Calculation refused");
    }
}
