//! Calculator engine
//!
//! A four-function calculator without precedence: an operator or `=`
//! commits the pending operation against the accumulator, left to right.
//! `5 + 3 + 2 =` shows `8` on the second `+` and `10` on `=`.

use crate::error::{CalcError, CalcResult, TokenError};
use crate::format::{format_number, parse_display};
use crate::token::{Digit, Operator, Token};

/// Text shown after a failed commit.
pub const ERROR_TEXT: &str = "Error";

/// Longest entry the user can type, sign and point included.
pub const MAX_ENTRY_LEN: usize = 15;

/// Apply `op` to `a` and `b`.
pub fn apply(a: f64, b: f64, op: Operator) -> CalcResult<f64> {
    let result = match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => {
            if b == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            a / b
        }
    };
    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalcError::Overflow)
    }
}

/// All mutable calculator state. The UI owns one and feeds it tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    display: String,
    accumulator: f64,
    pending_operator: Option<Operator>,
    start_new_number: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            accumulator: 0.0,
            pending_operator: None,
            start_new_number: true,
        }
    }

    /// Text the UI should render.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Result of the last committed operation.
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// Whether the next digit or dot starts a fresh number.
    pub fn starts_new_number(&self) -> bool {
        self.start_new_number
    }

    /// Single entry point for user input.
    pub fn handle(&mut self, token: Token) {
        log::trace!("token {}", token);
        match token {
            Token::Digit(d) => self.append_digit(d),
            Token::Dot => self.append_dot(),
            Token::ClearAll => self.clear_all(),
            Token::ClearEntry => self.clear_entry(),
            Token::Backspace => self.backspace(),
            Token::ToggleSign => self.toggle_sign(),
            Token::Operator(op) => self.set_operator(op),
            Token::Equals => self.equals(),
        }
    }

    /// Parse a button label and handle it. Unknown labels change nothing.
    pub fn handle_label(&mut self, label: &str) -> Result<(), TokenError> {
        let token = label.parse::<Token>()?;
        self.handle(token);
        Ok(())
    }

    fn append_digit(&mut self, d: Digit) {
        if self.start_new_number {
            self.display = d.label().to_string();
            self.start_new_number = false;
        } else if self.display == "0" {
            self.display = d.label().to_string();
        } else if self.display.chars().count() < MAX_ENTRY_LEN {
            self.display.push(d.as_char());
        }
    }

    fn append_dot(&mut self) {
        if self.start_new_number {
            self.display = "0.".to_string();
            self.start_new_number = false;
        } else if !self.display.contains('.') && self.display.chars().count() < MAX_ENTRY_LEN {
            self.display.push('.');
        }
    }

    fn clear_all(&mut self) {
        *self = Self::new();
    }

    fn clear_entry(&mut self) {
        self.display = "0".to_string();
        self.start_new_number = true;
    }

    fn backspace(&mut self) {
        if self.start_new_number {
            return;
        }
        if self.display.chars().count() <= 1 {
            self.display = "0".to_string();
            self.start_new_number = true;
        } else {
            self.display.pop();
        }
    }

    fn toggle_sign(&mut self) {
        if self.display == "0" || self.display == ERROR_TEXT {
            return;
        }
        match self.display.strip_prefix('-') {
            // a lone "-" left by backspacing must not leave the display empty
            Some("") => self.display = "0".to_string(),
            Some(rest) => self.display = rest.to_string(),
            None => self.display.insert(0, '-'),
        }
    }

    fn set_operator(&mut self, op: Operator) {
        let result = self.commit();
        match result {
            Ok(()) => {
                self.pending_operator = Some(op);
                self.start_new_number = true;
            }
            Err(e) => self.fail(e),
        }
    }

    fn equals(&mut self) {
        if self.pending_operator.is_none() {
            return;
        }
        if let Err(e) = self.commit() {
            self.fail(e);
        }
        // `=` ends the pending operation even when the commit failed
        self.pending_operator = None;
        self.start_new_number = true;
    }

    /// Fold the displayed number into the accumulator. With no pending
    /// operator the number simply becomes the accumulator.
    fn commit(&mut self) -> CalcResult<()> {
        let x = parse_display(&self.display)?;
        match self.pending_operator {
            None => self.accumulator = x,
            Some(op) => {
                let result = apply(self.accumulator, x, op)?;
                log::debug!(
                    "{} {} {} = {}",
                    format_number(self.accumulator),
                    op.symbol(),
                    format_number(x),
                    format_number(result)
                );
                self.accumulator = result;
                self.display = format_number(result);
            }
        }
        Ok(())
    }

    fn fail(&mut self, e: CalcError) {
        log::warn!("calculation failed: {}", e);
        self.display = ERROR_TEXT.to_string();
        self.start_new_number = true;
    }
}
