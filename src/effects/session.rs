//! Calculator session that executes key presses as effects.

use crate::core::{CalcError, Calculator, Key};
use crate::effects::presenter::Presenter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Result of a successful key press
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    /// The key that was pressed
    pub key: Key,

    /// State after the key press
    pub calculator: Calculator,
}

/// Bookkeeping tracked by a session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionMetadata {
    /// When the session was created
    pub created_at: DateTime<Utc>,

    /// Last time a step was applied
    pub updated_at: DateTime<Utc>,

    /// Key presses applied so far
    pub events_handled: usize,

    /// Key presses refused with an error
    pub errors_reported: usize,
}

impl Default for SessionMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            events_handled: 0,
            errors_reported: 0,
        }
    }
}

/// Single-writer owner of one calculator.
///
/// Key presses are evaluated against the pure core and run as effects in a
/// [`Presenter`] environment; the resulting [`Step`] is then installed with
/// [`apply_step`](Self::apply_step).
pub struct Session {
    id: Uuid,
    current: Calculator,
    metadata: SessionMetadata,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Calculator::new())
    }
}

impl Session {
    /// Create a session around a calculator
    pub fn new(calculator: Calculator) -> Self {
        Self {
            id: Uuid::new_v4(),
            current: calculator,
            metadata: SessionMetadata::default(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Get current calculator state (pure)
    pub fn calculator(&self) -> &Calculator {
        &self.current
    }

    pub fn metadata(&self) -> &SessionMetadata {
        &self.metadata
    }

    /// Evaluate one key press.
    /// The returned effect renders the new state, or reports the error,
    /// through the environment. Nothing changes in the session until
    /// `apply_step()` is called with the output.
    pub fn dispatch<Env: Presenter>(&self, key: Key) -> BoxedEffect<Step, CalcError, Env> {
        debug!(
            session = %self.id,
            key = %key.label(),
            phase = %self.current.phase(),
            "Key pressed"
        );

        let outcome = self.current.handle(key);
        from_fn(move |env: &Env| match &outcome {
            Ok(calculator) => {
                env.render(calculator);
                Ok(Step {
                    key,
                    calculator: calculator.clone(),
                })
            }
            Err(error) => {
                env.report(error);
                Err(*error)
            }
        })
        .boxed()
    }

    /// Install the state produced by a dispatched key press.
    pub fn apply_step(&mut self, step: Step) {
        if step.calculator.history().len() > self.current.history().len() {
            if let Some(entry) = step.calculator.history().last() {
                info!(
                    session = %self.id,
                    expression = %entry.expression(),
                    result = entry.result(),
                    "Computation completed"
                );
            }
        }

        self.current = step.calculator;
        self.metadata.events_handled += 1;
        self.metadata.updated_at = Utc::now();
    }

    /// Count a key press that was refused.
    pub fn record_failure(&mut self, error: &CalcError) {
        warn!(session = %self.id, error = %error, "Key press aborted");
        self.metadata.errors_reported += 1;
        self.metadata.updated_at = Utc::now();
    }

    /// Dispatch, run and apply a key press in one go.
    pub async fn press<Env: Presenter>(
        &mut self,
        key: Key,
        env: &Env,
    ) -> Result<&Calculator, CalcError> {
        match self.dispatch(key).run(env).await {
            Ok(step) => {
                self.apply_step(step);
                Ok(&self.current)
            }
            Err(error) => {
                self.record_failure(&error);
                Err(error)
            }
        }
    }
}
