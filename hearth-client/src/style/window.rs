//! Window constants

pub use hearth_client::config::settings::{
    MIN_WINDOW_HEIGHT as WINDOW_HEIGHT_MIN, MIN_WINDOW_WIDTH as WINDOW_WIDTH_MIN,
};
