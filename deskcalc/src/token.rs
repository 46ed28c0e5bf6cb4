//! Input tokens
//!
//! Every button on the keypad maps to exactly one [`Token`]. Labels only
//! exist at the edge, for the buttons themselves and for [`FromStr`].

use std::fmt;
use std::str::FromStr;

use crate::error::TokenError;

/// Binary operator waiting for its right-hand operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Symbol shown on the button
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }
}

/// A decimal digit `0..=9`. Only [`Digit::new`] and [`Digit::ALL`] build
/// one, so an out-of-range digit cannot reach the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    pub const ALL: [Digit; 10] = [
        Digit(0),
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    pub fn new(d: u8) -> Result<Self, TokenError> {
        Self::ALL
            .get(d as usize)
            .copied()
            .ok_or(TokenError::DigitOutOfRange(d))
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }

    pub const fn label(self) -> &'static str {
        const LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        LABELS[self.0 as usize]
    }
}

/// One discrete user input accepted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Digit(Digit),
    Dot,
    /// `C`
    ClearAll,
    /// `CE`
    ClearEntry,
    /// `←`
    Backspace,
    /// `±`
    ToggleSign,
    Operator(Operator),
    Equals,
}

impl Token {
    /// Build a digit token, rejecting anything above 9.
    pub fn digit(d: u8) -> Result<Self, TokenError> {
        Digit::new(d).map(Token::Digit)
    }

    /// Button label for this token.
    pub fn label(&self) -> &'static str {
        match self {
            Token::Digit(d) => d.label(),
            Token::Dot => ".",
            Token::ClearAll => "C",
            Token::ClearEntry => "CE",
            Token::Backspace => "←",
            Token::ToggleSign => "±",
            Token::Operator(op) => op.symbol(),
            Token::Equals => "=",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Token {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = match s {
            "." => Token::Dot,
            "C" => Token::ClearAll,
            "CE" => Token::ClearEntry,
            "←" => Token::Backspace,
            "±" => Token::ToggleSign,
            "+" => Token::Operator(Operator::Add),
            "-" => Token::Operator(Operator::Subtract),
            "*" => Token::Operator(Operator::Multiply),
            "/" => Token::Operator(Operator::Divide),
            "=" => Token::Equals,
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Token::digit(c as u8 - b'0')?,
                    _ => return Err(TokenError::Unknown(s.to_string())),
                }
            }
        };
        Ok(token)
    }
}
