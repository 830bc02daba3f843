use std::io::Write;

use anyhow::Result;
use crossterm::event::EventStream;
use tracing::debug;

use super::RawModeGuard;
use crate::display::renderer::Renderer;
use crate::session::event_loop::run_session;
use crate::session::state::SessionState;

pub struct RunConfig {
    pub show_help: bool,
    pub width: usize,
}

/// Run the interactive calculator on the terminal until the user quits.
pub async fn run<W: Write>(config: RunConfig, writer: W) -> Result<()> {
    let mut renderer = Renderer::with_writer(writer);
    renderer.set_width(config.width);
    let mut state = SessionState::new();

    let _raw = RawModeGuard::acquire()?;
    if config.show_help {
        renderer.render_help();
    }

    let mut events = EventStream::new();
    let outcome = run_session(&mut events, &mut state, &mut renderer).await?;
    debug!(?outcome, display = %state.display, "session ended");
    Ok(())
}
