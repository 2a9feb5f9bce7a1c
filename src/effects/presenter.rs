//! The environment a session renders into.

use crate::core::{CalcError, Calculator};

/// Presentation layer contract.
///
/// A session calls `render` after every successful key press and `report`
/// when a key press is refused. Implementations are the effect environment,
/// so they must be cheap to clone and shareable across threads.
pub trait Presenter: Clone + Send + Sync + 'static {
    /// Show the new state (display text, history, ...).
    fn render(&self, calculator: &Calculator);

    /// Notify the user that a key press was aborted.
    fn report(&self, error: &CalcError);
}

/// Headless environment: renders nothing, reports nothing.
impl Presenter for () {
    fn render(&self, _calculator: &Calculator) {}

    fn report(&self, _error: &CalcError) {}
}
