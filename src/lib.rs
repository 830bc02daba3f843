use std::io::Write;

use display::renderer::Renderer;
use event::Action;
use session::state::SessionState;

pub mod arith;
pub mod commands;
pub mod config;
pub mod display;
pub mod event;
pub mod session;

/// Apply a user action to the session and redraw the display.
pub fn handle_action<W: Write>(
    action: Action,
    state: &mut SessionState,
    renderer: &mut Renderer<W>,
) {
    session::entry::apply(state, action);
    renderer.render_frame(state);
}
