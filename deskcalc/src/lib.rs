//! deskcalc — a four-function desktop calculator
//!
//! The engine is UI-free: [`CalculatorState::handle`] takes one [`Token`]
//! per button press and updates the display text.

pub mod engine;
pub mod error;
pub mod format;
pub mod keypad;
pub mod token;

pub use engine::CalculatorState;
pub use error::{CalcError, CalcResult, TokenError};
pub use format::format_number;
pub use token::{Digit, Operator, Token};
