//! Text helpers with advanced shaping
//!
//! Names and translations may contain non-Latin scripts, so every label
//! goes through the advanced shaper.

use iced::widget::text::{Shaping, Wrapping};
use iced::widget::{Text, text};

/// Text widget with advanced shaping
pub fn shaped_text<'a>(content: impl Into<String>) -> Text<'a> {
    text(content.into()).shaping(Shaping::Advanced)
}

/// Shaped text that wraps at word boundaries, breaking long words if needed
pub fn shaped_text_wrapped<'a>(content: impl Into<String>) -> Text<'a> {
    shaped_text(content).wrapping(Wrapping::WordOrGlyph)
}
