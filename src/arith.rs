//! The four arithmetic primitives behind the keypad.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an evaluation produced no number.
///
/// The `Display` text is what the calculator shows in place of a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Cannot divide by zero!")]
    DivisionByZero,
    #[error("Invalid operator")]
    InvalidOperator(char),
}

/// A binary operator on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    pub fn apply(self, a: f64, b: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide if b == 0.0 => Err(CalcError::DivisionByZero),
            Self::Divide => Ok(a / b),
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = CalcError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Subtract),
            '*' => Ok(Self::Multiply),
            '/' => Ok(Self::Divide),
            other => Err(CalcError::InvalidOperator(other)),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Apply the operator named by `symbol` to `a` and `b`.
pub fn evaluate(symbol: char, a: f64, b: f64) -> Result<f64, CalcError> {
    Operator::try_from(symbol)?.apply(a, b)
}

/// Render a value the way the display shows it: shortest text that parses
/// back to the same `f64`. Negative zero shows as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// Read display text back into a value. `None` for anything that is not a
/// numeric literal, including error messages.
pub fn parse_number(text: &str) -> Option<f64> {
    text.parse().ok()
}
