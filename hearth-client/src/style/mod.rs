//! Styling: layout constants, text shaping helpers and widget styles

mod layout;
mod shaping;
mod widgets;
mod window;

pub use layout::*;
pub use shaping::{shaped_text, shaped_text_wrapped};
pub use widgets::{
    alternating_row_style, badge_style, content_background_style, error_text_style,
    modal_card_style, modal_overlay_style, muted_text_style, panel_title,
};
pub use window::{WINDOW_HEIGHT_MIN, WINDOW_WIDTH_MIN};
