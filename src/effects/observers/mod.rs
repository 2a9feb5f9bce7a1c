//! Ready-made presenters
//!
//! - `LoggingPresenter`: writes renders and errors to `tracing`
//! - `RecordingPresenter`: buffers them for a caller to poll

mod logging;
mod recording;

pub use logging::LoggingPresenter;
pub use recording::RecordingPresenter;
