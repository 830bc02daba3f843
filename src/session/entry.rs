//! Key-by-key entry rules.
//!
//! Every operation takes the session by `&mut` and returns the new display
//! text. Evaluation failures never escape: their message takes the place of
//! the result on the display.

use tracing::{debug, warn};

use super::state::SessionState;
use crate::arith::{CalcError, Operator, format_number, parse_number};
use crate::event::Action;

/// Apply a single action and return the resulting display text.
pub fn apply(state: &mut SessionState, action: Action) -> &str {
    debug!(?action, display = %state.display, "applying action");
    match action {
        Action::Digit(d) => digit(state, d),
        Action::DecimalPoint => decimal_point(state),
        Action::Operator(op) => operator(state, op),
        Action::Equals => equals(state),
        Action::Clear => clear(state),
        Action::Backspace => backspace(state),
    }
}

/// Enter a digit `0`-`9`.
pub fn digit(state: &mut SessionState, d: char) -> &str {
    if state.awaiting_fresh_entry {
        state.display = d.to_string();
        state.awaiting_fresh_entry = false;
    } else if state.display == "0" {
        state.display = d.to_string();
    } else {
        state.display.push(d);
    }
    &state.display
}

pub fn decimal_point(state: &mut SessionState) -> &str {
    if state.awaiting_fresh_entry {
        state.display = "0.".to_string();
        state.awaiting_fresh_entry = false;
    } else if !state.display.contains('.') {
        state.display.push('.');
    }
    &state.display
}

/// Select `op`, first folding any pending operation into a running result.
///
/// Pressing a second operator before typing another operand only replaces
/// the pending operator.
pub fn operator(state: &mut SessionState, op: Operator) -> &str {
    let Some(value) = parse_number(&state.display) else {
        return &state.display;
    };

    match (state.pending_operand, state.pending_operator) {
        (None, _) => state.pending_operand = Some(value),
        (Some(operand), Some(pending)) if !state.awaiting_fresh_entry => {
            match pending.apply(operand, value) {
                Ok(result) => {
                    state.display = format_number(result);
                    state.pending_operand = Some(result);
                }
                Err(err) => {
                    fail(state, err);
                    return &state.display;
                }
            }
        }
        _ => {}
    }

    state.awaiting_fresh_entry = true;
    state.pending_operator = Some(op);
    &state.display
}

/// Finish the pending operation, if there is one.
pub fn equals(state: &mut SessionState) -> &str {
    let (Some(operand), Some(pending)) = (state.pending_operand, state.pending_operator) else {
        return &state.display;
    };
    let Some(value) = parse_number(&state.display) else {
        return &state.display;
    };

    match pending.apply(operand, value) {
        Ok(result) => state.display = format_number(result),
        Err(err) => fail(state, err),
    }
    state.pending_operand = None;
    state.pending_operator = None;
    state.awaiting_fresh_entry = true;
    &state.display
}

pub fn clear(state: &mut SessionState) -> &str {
    *state = SessionState::default();
    &state.display
}

/// Drop the last character. Never leaves the display empty or holding
/// something that is not a number.
pub fn backspace(state: &mut SessionState) -> &str {
    let mut text = std::mem::take(&mut state.display);
    text.pop();
    if parse_number(&text).is_none() {
        text = "0".to_string();
    }
    state.display = text;
    &state.display
}

fn fail(state: &mut SessionState, err: CalcError) {
    warn!(%err, "evaluation failed");
    state.display = err.to_string();
    state.pending_operand = None;
    state.pending_operator = None;
    state.awaiting_fresh_entry = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::parse_keys;

    fn press(state: &mut SessionState, keys: &str) -> String {
        for action in parse_keys(keys).unwrap() {
            apply(state, action);
        }
        state.display.clone()
    }

    fn run(keys: &str) -> String {
        press(&mut SessionState::default(), keys)
    }

    #[test]
    fn chained_operations_evaluate_left_to_right() {
        assert_eq!(run("5+3+2="), "10");
        assert_eq!(run("2+3*4="), "20");
    }

    #[test]
    fn chained_operator_shows_running_result() {
        let mut state = SessionState::default();
        assert_eq!(press(&mut state, "5+3+"), "8");
        assert_eq!(state.pending_operand, Some(8.0));
        assert_eq!(state.pending_operator, Some(Operator::Add));
        assert!(state.awaiting_fresh_entry);
    }

    #[test]
    fn last_operator_before_second_operand_wins() {
        assert_eq!(run("5+*3="), "15");
        assert_eq!(run("9-/+1="), "10");
    }

    #[test]
    fn division_by_zero_shows_message_and_resets() {
        let mut state = SessionState::default();
        assert_eq!(press(&mut state, "8/0="), "Cannot divide by zero!");
        assert_eq!(state.pending_operand, None);
        assert_eq!(state.pending_operator, None);
        assert!(state.is_error());
    }

    #[test]
    fn division_by_zero_mid_chain_drops_operator() {
        let mut state = SessionState::default();
        assert_eq!(press(&mut state, "8/0+"), "Cannot divide by zero!");
        assert_eq!(state.pending_operand, None);
        assert_eq!(state.pending_operator, None);
    }

    #[test]
    fn digit_after_error_starts_fresh() {
        assert_eq!(run("8/0=7"), "7");
        assert_eq!(run("8/0=4+2="), "6");
    }

    #[test]
    fn operators_ignored_on_error_display() {
        let mut state = SessionState::default();
        press(&mut state, "8/0=");
        assert_eq!(press(&mut state, "+="), "Cannot divide by zero!");
        assert_eq!(state.pending_operand, None);
        assert_eq!(state.pending_operator, None);
    }

    #[test]
    fn second_decimal_point_is_ignored() {
        assert_eq!(run("1..2"), "1.2");
        assert_eq!(run("1.2.3"), "1.23");
    }

    #[test]
    fn decimal_point_after_operator_starts_fresh_entry() {
        assert_eq!(run("5+.5="), "5.5");
        assert_eq!(run("3+3=."), "0.");
        assert_eq!(run("3=."), "3.");
    }

    #[test]
    fn backspace_floors_at_zero() {
        let mut state = SessionState::default();
        press(&mut state, "5");
        backspace(&mut state);
        assert_eq!(state.display, "0");
        backspace(&mut state);
        assert_eq!(state.display, "0");
    }

    #[test]
    fn backspace_drops_last_character() {
        assert_eq!(run("123<"), "12");
        assert_eq!(run("1.5<"), "1.");
    }

    #[test]
    fn backspace_keeps_pending_operation() {
        let mut state = SessionState::default();
        press(&mut state, "4*25<");
        assert_eq!(state.display, "2");
        assert_eq!(state.pending_operand, Some(4.0));
        assert_eq!(state.pending_operator, Some(Operator::Multiply));
        assert_eq!(press(&mut state, "="), "8");
    }

    #[test]
    fn backspace_never_leaves_non_numbers() {
        assert_eq!(run("8/0=<"), "0");
        assert_eq!(run("0-5=<"), "0");
    }

    #[test]
    fn leading_zero_is_suppressed() {
        assert_eq!(run("7"), "7");
        assert_eq!(run("007"), "7");
        assert_eq!(run("0.07"), "0.07");
    }

    #[test]
    fn digits_replace_result_after_equals() {
        assert_eq!(run("2+2=5"), "5");
        assert_eq!(run("2+2=+1="), "5");
    }

    #[test]
    fn equals_without_pending_operation_is_noop() {
        let mut state = SessionState::default();
        assert_eq!(press(&mut state, "42="), "42");
        assert!(!state.awaiting_fresh_entry);
    }

    #[test]
    fn equals_right_after_operator_reuses_operand() {
        assert_eq!(run("5+="), "10");
    }

    #[test]
    fn clear_resets_everything() {
        let mut state = SessionState::default();
        press(&mut state, "12+3");
        clear(&mut state);
        assert_eq!(state, SessionState::default());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut once = SessionState::default();
        press(&mut once, "9*9");
        clear(&mut once);

        let mut twice = SessionState::default();
        press(&mut twice, "9*9");
        clear(&mut twice);
        clear(&mut twice);

        assert_eq!(once, twice);
    }

    #[test]
    fn fractional_results_keep_full_precision() {
        assert_eq!(run(".1+.2="), "0.30000000000000004");
        assert_eq!(run("1/4="), "0.25");
        assert_eq!(run("0-3*0="), "0");
    }

    #[test]
    fn operator_never_set_without_operand() {
        for keys in ["+", "8/0+", "8/0=*", "c-", "5+3="] {
            let mut state = SessionState::default();
            press(&mut state, keys);
            assert!(
                state.pending_operator.is_none() || state.pending_operand.is_some(),
                "{keys}: {state:?}"
            );
        }
    }
}
