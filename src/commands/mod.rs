use anyhow::Result;
use crossterm::terminal;

pub mod eval;
pub mod run;

/// Keeps the terminal in raw mode until dropped.
pub struct RawModeGuard(());

impl RawModeGuard {
    pub fn acquire() -> Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self(()))
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        terminal::disable_raw_mode().ok();
    }
}
