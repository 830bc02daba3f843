use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::event::Event;
use futures::{Stream, StreamExt};
use tracing::debug;

use crate::display::input::{InputAction, map_key};
use crate::display::renderer::Renderer;
use crate::handle_action;
use crate::session::state::SessionState;

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// User pressed a quit key.
    Quit,
    /// The event source ran dry.
    InputClosed,
}

/// Draw the display, then handle terminal events one at a time until the
/// user quits or the event stream ends.
pub async fn run_session<S, W>(
    events: &mut S,
    state: &mut SessionState,
    renderer: &mut Renderer<W>,
) -> Result<SessionOutcome>
where
    S: Stream<Item = io::Result<Event>> + Unpin,
    W: Write,
{
    renderer.render_frame(state);

    while let Some(event) = events.next().await {
        let event = event.context("failed to read terminal event")?;
        let Event::Key(key) = event else {
            continue;
        };
        match map_key(&key) {
            InputAction::None => {}
            InputAction::Calc(action) => handle_action(action, state, renderer),
            InputAction::Quit => {
                debug!("quit requested");
                return Ok(SessionOutcome::Quit);
            }
        }
    }

    Ok(SessionOutcome::InputClosed)
}
