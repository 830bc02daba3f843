use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::Print;
use crossterm::{cursor, terminal};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme;
use crate::arith::format_number;
use crate::session::state::SessionState;

/// Lines occupied by one frame: box top, display row, box bottom, status.
const FRAME_LINES: u16 = 4;

/// Narrowest inner box width that still leaves room for a few digits.
pub const MIN_WIDTH: usize = 8;

/// Display configuration for the renderer.
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Inner width of the display box, in terminal columns.
    pub width: usize,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self { width: 24 }
    }
}

/// Draws the calculator display and redraws it in place after each action.
pub struct Renderer<W: Write = io::Stdout> {
    config: RendererConfig,
    /// Whether a frame is on screen that the next render should replace.
    frame_drawn: bool,
    out: W,
}

impl Default for Renderer<io::Stdout> {
    fn default() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Renderer<io::Stdout> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<W: Write> Renderer<W> {
    pub fn with_writer(writer: W) -> Self {
        Self {
            config: RendererConfig::default(),
            frame_drawn: false,
            out: writer,
        }
    }

    pub fn set_width(&mut self, width: usize) {
        self.config.width = width.max(MIN_WIDTH);
    }

    pub fn render_help(&mut self) {
        let help = "0-9 . + - * / · Enter = · Backspace · Esc clear · q quit";
        queue!(self.out, Print(theme::dim().apply(help)), Print("\r\n")).ok();
        self.out.flush().ok();
    }

    /// Draw the display for `state`, replacing the previous frame if any.
    pub fn render_frame(&mut self, state: &SessionState) {
        if self.frame_drawn {
            queue!(
                self.out,
                cursor::MoveToPreviousLine(FRAME_LINES),
                terminal::Clear(terminal::ClearType::FromCursorDown),
            )
            .ok();
        }

        let width = self.config.width;
        let room = width - 2;
        let text = fit(&state.display, room);
        let pad = " ".repeat(room - text.width());
        let style = if state.is_error() {
            theme::error()
        } else {
            theme::number()
        };
        let border = "─".repeat(width);

        queue!(
            self.out,
            Print(theme::dim().apply(format!("┌{border}┐"))),
            Print("\r\n"),
            Print(theme::dim().apply("│ ")),
            Print(pad),
            Print(style.apply(text)),
            Print(theme::dim().apply(" │")),
            Print("\r\n"),
            Print(theme::dim().apply(format!("└{border}┘"))),
            Print("\r\n"),
        )
        .ok();

        if let (Some(operand), Some(op)) = (state.pending_operand, state.pending_operator) {
            let status = format!("{} {op}", format_number(operand));
            queue!(self.out, Print(theme::pending().apply(status))).ok();
        }
        queue!(self.out, Print("\r\n")).ok();
        self.out.flush().ok();
        self.frame_drawn = true;
    }
}

/// Keep the rightmost part of `text` that fits in `room` columns, marking
/// the cut with `…`.
fn fit(text: &str, room: usize) -> String {
    if text.width() <= room {
        return text.to_string();
    }
    let mut kept = Vec::new();
    let mut used = 1;
    for c in text.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > room {
            break;
        }
        used += w;
        kept.push(c);
    }
    std::iter::once('…').chain(kept.into_iter().rev()).collect()
}
