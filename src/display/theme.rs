//! Terminal display styles.
//!
//! Only named ANSI colors, so the calculator follows the user's terminal
//! palette. Emphasis comes from `Attribute::Dim` / `Attribute::Bold`.

use crossterm::style::{Attribute, Color, ContentStyle};

pub fn dim() -> ContentStyle {
    ContentStyle {
        attributes: Attribute::Dim.into(),
        ..Default::default()
    }
}

pub fn number() -> ContentStyle {
    ContentStyle {
        attributes: Attribute::Bold.into(),
        ..Default::default()
    }
}

pub fn error() -> ContentStyle {
    ContentStyle {
        foreground_color: Some(Color::Red),
        attributes: Attribute::Bold.into(),
        ..Default::default()
    }
}

pub fn pending() -> ContentStyle {
    ContentStyle {
        foreground_color: Some(Color::Cyan),
        ..Default::default()
    }
}
