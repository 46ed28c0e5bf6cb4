//! Keypad layout
//!
//! ```text
//! [ CE ] [ C ] [ ← ] [ / ]
//! [ 7  ] [ 8 ] [ 9 ] [ * ]
//! [ 4  ] [ 5 ] [ 6 ] [ - ]
//! [ 1  ] [ 2 ] [ 3 ] [ + ]
//! [ ±  ] [ 0 ] [ . ] [ = ]
//! ```

use crate::token::{Digit, Operator, Token};

pub const ROWS: usize = 5;
pub const COLS: usize = 4;

/// Row-major button grid.
pub const LAYOUT: [[Token; COLS]; ROWS] = [
    [Token::ClearEntry, Token::ClearAll, Token::Backspace, Token::Operator(Operator::Divide)],
    [Token::Digit(Digit::ALL[7]), Token::Digit(Digit::ALL[8]), Token::Digit(Digit::ALL[9]), Token::Operator(Operator::Multiply)],
    [Token::Digit(Digit::ALL[4]), Token::Digit(Digit::ALL[5]), Token::Digit(Digit::ALL[6]), Token::Operator(Operator::Subtract)],
    [Token::Digit(Digit::ALL[1]), Token::Digit(Digit::ALL[2]), Token::Digit(Digit::ALL[3]), Token::Operator(Operator::Add)],
    [Token::ToggleSign, Token::Digit(Digit::ALL[0]), Token::Dot, Token::Equals],
];

pub fn rows() -> impl Iterator<Item = &'static [Token; COLS]> {
    LAYOUT.iter()
}

/// Token at a grid position, if the position is on the keypad.
pub fn token_at(row: usize, col: usize) -> Option<Token> {
    LAYOUT.get(row).and_then(|r| r.get(col)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_token_appears_once() {
        let mut vocabulary: Vec<Token> = Digit::ALL.iter().copied().map(Token::Digit).collect();
        vocabulary.extend([
            Token::Dot,
            Token::ClearAll,
            Token::ClearEntry,
            Token::Backspace,
            Token::ToggleSign,
            Token::Equals,
        ]);
        vocabulary.extend(Operator::ALL.map(Token::Operator));

        let placed: Vec<Token> = rows().flatten().copied().collect();
        assert_eq!(placed.len(), vocabulary.len());
        for token in vocabulary {
            assert_eq!(
                placed.iter().filter(|t| **t == token).count(),
                1,
                "token {} should appear exactly once",
                token
            );
        }
    }

    #[test]
    fn test_corners() {
        assert_eq!(token_at(0, 0), Some(Token::ClearEntry));
        assert_eq!(token_at(4, 3), Some(Token::Equals));
        assert_eq!(token_at(5, 0), None);
        assert_eq!(token_at(0, 4), None);
    }

    #[test]
    fn test_labels_parse_back() {
        for token in rows().flatten() {
            assert_eq!(token.label().parse::<Token>(), Ok(*token));
        }
    }
}
