//! Tally: A pure functional arithmetic calculator
//!
//! Tally is built on Stillwater's "pure core, imperative shell" philosophy.
//! The calculator logic is a set of pure transitions over an explicit state
//! record, while rendering and error reporting are isolated in effects run
//! against a presentation environment.
//!
//! # Core Concepts
//!
//! - **Calculator**: the state record (display, pending operand and operator,
//!   history) with one pure transition per key press
//! - **History**: immutable log of completed computations
//! - **Session**: the imperative shell that owns a calculator and notifies a
//!   `Presenter`
//!
//! The display doubles as an operator indicator: after pressing `+` it shows
//! `"+"` until the next digit is typed.
//!
//! # Example
//!
//! ```rust
//! use tally::core::{Calculator, InputToken, Operator};
//!
//! let calc = Calculator::new()
//!     .enter_digit(InputToken::digit(5).unwrap())
//!     .apply_operation(Operator::Add)
//!     .unwrap()
//!     .enter_digit(InputToken::digit(3).unwrap())
//!     .equals()
//!     .unwrap();
//!
//! assert_eq!(calc.display(), "8");
//! assert_eq!(calc.history().len(), 1);
//!
//! let err = calc
//!     .apply_operation(Operator::Divide)
//!     .unwrap()
//!     .enter_digit(InputToken::digit(0).unwrap())
//!     .equals();
//! assert!(err.is_err());
//! ```

pub mod builder;
pub mod core;
pub mod effects;

// Re-export commonly used types
pub use crate::builder::CalculatorBuilder;
pub use crate::core::{CalcError, Calculator, HistoryEntry, HistoryLog, InputToken, Key, Operator};
pub use crate::effects::{Presenter, Session};
