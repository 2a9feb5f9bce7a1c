//! Effectful calculator sessions using Stillwater 0.11.0.
//!
//! This module provides the "imperative shell" around the pure core:
//! key presses are evaluated purely, then run as effects against a
//! presentation environment, and finally installed in the session.
//!
//! # Key Concepts
//!
//! - **Presenter**: the environment that renders state and reports errors
//! - **Session**: owns one calculator and applies steps (single writer)
//! - **Effects**: uses Stillwater's effect system
//!
//! # Example
//!
//! ```rust
//! use tally::core::parse_keys;
//! use tally::effects::{observers::RecordingPresenter, Session};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let mut session = Session::default();
//! let env = RecordingPresenter::new();
//!
//! for key in parse_keys("5 + 3 =").unwrap() {
//!     session.press(key, &env).await.unwrap();
//! }
//!
//! assert_eq!(session.calculator().display(), "8");
//! assert_eq!(env.last_display().as_deref(), Some("8"));
//! # });
//! ```

pub mod observers;
mod presenter;
mod session;

pub use presenter::Presenter;
pub use session::{Session, SessionMetadata, Step};
