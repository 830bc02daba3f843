use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::arith::Operator;

/// One user action on the calculator, independent of where it came from
/// (a key press, a scripted key sequence, a test).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Digit(char),
    DecimalPoint,
    Operator(Operator),
    Equals,
    Clear,
    Backspace,
}

impl Action {
    /// Map a character of the key-sequence alphabet to its action.
    ///
    /// `0-9 . + - * / =` mean what they say, `c`/`C` clears and `<` is backspace.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self::Digit(c)),
            '.' => Some(Self::DecimalPoint),
            '=' => Some(Self::Equals),
            'c' | 'C' => Some(Self::Clear),
            '<' => Some(Self::Backspace),
            _ => Operator::try_from(c).ok().map(Self::Operator),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized key `{key}` at position {position}")]
pub struct KeyParseError {
    pub key: char,
    pub position: usize,
}

/// Parse a scripted key sequence like `"12+3.5="`. Whitespace is ignored.
pub fn parse_keys(keys: &str) -> Result<Vec<Action>, KeyParseError> {
    keys.chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(position, key)| Action::from_char(key).ok_or(KeyParseError { key, position }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keys_maps_every_symbol() {
        assert_eq!(
            parse_keys("7.+-*/=c<").unwrap(),
            vec![
                Action::Digit('7'),
                Action::DecimalPoint,
                Action::Operator(Operator::Add),
                Action::Operator(Operator::Subtract),
                Action::Operator(Operator::Multiply),
                Action::Operator(Operator::Divide),
                Action::Equals,
                Action::Clear,
                Action::Backspace,
            ]
        );
    }

    #[test]
    fn parse_keys_skips_whitespace() {
        assert_eq!(
            parse_keys(" 1 + 2 ").unwrap(),
            vec![
                Action::Digit('1'),
                Action::Operator(Operator::Add),
                Action::Digit('2'),
            ]
        );
    }

    #[test]
    fn parse_keys_reports_position() {
        let err = parse_keys("12%3").unwrap_err();
        assert_eq!(err, KeyParseError { key: '%', position: 2 });
        assert_eq!(err.to_string(), "unrecognized key `%` at position 2");
    }
}
