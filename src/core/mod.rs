//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - Operators and the arithmetic behind them
//! - Input tokens and key events
//! - The `Calculator` state record with one pure transition per event
//! - Immutable history tracking
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod calculator;
mod error;
mod history;
mod input;
mod number;
mod operator;
mod phase;
pub mod serde_float;
mod settings;

pub use calculator::Calculator;
pub use error::{CalcError, ParseKeyError};
pub use history::{HistoryEntry, HistoryLog};
pub use input::{parse_keys, Digit, InputToken, Key};
pub use number::{format_number, parse_display};
pub use operator::{apply, Operator};
pub use phase::Phase;
pub use settings::{Settings, MAX_PRECISION};
