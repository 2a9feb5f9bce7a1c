//! Recording presenter
//!
//! Buffers rendered display texts and reported errors so a caller can poll
//! them after each key press. Clones share the same buffers.

use crate::core::{CalcError, Calculator};
use crate::effects::presenter::Presenter;
use std::sync::{Arc, Mutex, PoisonError};

/// Presenter that records output in shared buffers
#[derive(Clone, Debug, Default)]
pub struct RecordingPresenter {
    displays: Arc<Mutex<Vec<String>>>,
    errors: Arc<Mutex<Vec<CalcError>>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every display text rendered so far, oldest first
    pub fn displays(&self) -> Vec<String> {
        self.displays
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Latest rendered display text
    pub fn last_display(&self) -> Option<String> {
        self.displays
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Every error reported so far, oldest first
    pub fn errors(&self) -> Vec<CalcError> {
        self.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Presenter for RecordingPresenter {
    fn render(&self, calculator: &Calculator) {
        self.displays
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(calculator.display().to_string());
    }

    fn report(&self, error: &CalcError) {
        self.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(*error);
    }
}
