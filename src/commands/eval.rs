use std::io::Write;

use anyhow::Result;

use crate::event::parse_keys;
use crate::session::entry;
use crate::session::state::SessionState;

pub struct EvalConfig {
    /// Key sequence, e.g. `12+3.5=`.
    pub keys: String,
    /// Print the display after every key instead of only at the end.
    pub steps: bool,
    /// Print the final session state as JSON.
    pub json: bool,
}

/// Feed a key sequence through a fresh session and print the outcome.
pub fn eval<W: Write>(config: &EvalConfig, out: &mut W) -> Result<SessionState> {
    let actions = parse_keys(&config.keys)?;
    let mut state = SessionState::new();

    let keys = config.keys.chars().filter(|c| !c.is_whitespace());
    for (key, action) in keys.zip(actions) {
        let display = entry::apply(&mut state, action);
        if config.steps {
            writeln!(out, "{key}  {display}")?;
        }
    }

    if config.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&state)?)?;
    } else if !config.steps {
        writeln!(out, "{}", state.display)?;
    }
    Ok(state)
}
