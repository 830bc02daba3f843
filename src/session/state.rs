use serde::{Deserialize, Serialize};

use crate::arith::{Operator, parse_number};

/// Everything the calculator remembers between key presses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// First operand, waiting for an operator to be applied to it.
    pub pending_operand: Option<f64>,
    /// Only ever set while `pending_operand` is set.
    pub pending_operator: Option<Operator>,
    /// Text shown to the user: a numeric literal or an error message.
    pub display: String,
    /// The next digit replaces `display` instead of extending it.
    pub awaiting_fresh_entry: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            pending_operand: None,
            pending_operator: None,
            display: "0".to_string(),
            awaiting_fresh_entry: false,
        }
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the display holds an error message rather than a number.
    pub fn is_error(&self) -> bool {
        parse_number(&self.display).is_none()
    }
}
