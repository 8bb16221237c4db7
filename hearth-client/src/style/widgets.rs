//! Widget style functions
//!
//! All styles derive from the theme palette so they work with every
//! built-in theme.

use iced::widget::{Container, container, text};
use iced::{Background, Border, Center, Color, Fill, Theme};

use super::shaped_text;
use super::{STANDARD_BORDER_RADIUS, TITLE_ROW_HEIGHT, TITLE_SIZE};
use crate::types::Message;

// ============================================================================
// Container Styles
// ============================================================================

/// Content area background style
pub fn content_background_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.palette().background)),
        ..Default::default()
    }
}

/// Alternating row style - tinted background for even rows
pub fn alternating_row_style(is_even: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme| {
        if is_even {
            container::Style {
                background: Some(Background::Color(
                    theme.extended_palette().background.weak.color,
                )),
                ..Default::default()
            }
        } else {
            container::Style::default()
        }
    }
}

/// Modal overlay style (semi-transparent, theme-aware background)
pub fn modal_overlay_style(theme: &Theme) -> container::Style {
    let bg = theme.palette().background;
    container::Style {
        background: Some(Background::Color(Color::from_rgba(bg.r, bg.g, bg.b, 0.9))),
        ..Default::default()
    }
}

/// Card behind the dialog form
pub fn modal_card_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: STANDARD_BORDER_RADIUS.into(),
        },
        ..Default::default()
    }
}

/// Small rounded label next to a user name
pub fn badge_style(theme: &Theme) -> container::Style {
    let pair = theme.extended_palette().primary.weak;
    container::Style {
        background: Some(Background::Color(pair.color)),
        text_color: Some(pair.text),
        border: Border {
            radius: STANDARD_BORDER_RADIUS.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Text Styles
// ============================================================================

/// Error text style - uses danger color
pub fn error_text_style(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.palette().danger),
    }
}

/// Muted text style - for notes and secondary info
pub fn muted_text_style(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.palette().text.scale_alpha(0.6)),
    }
}

// ============================================================================
// Composite Widgets
// ============================================================================

/// Centered panel title
pub fn panel_title(title: impl Into<String>) -> Container<'static, Message> {
    container(
        shaped_text(title)
            .size(TITLE_SIZE)
            .width(Fill)
            .align_x(Center),
    )
    .height(TITLE_ROW_HEIGHT)
    .align_y(Center)
}
