//! Hearth admin client library
//!
//! Everything below the widget layer: the user administration API and its
//! websocket implementation, the add-user dialog controller, configuration
//! and localization. The `hearth-admin` binary builds the iced interface on
//! top of these modules.

pub mod api;
pub mod config;
pub mod dialog;
pub mod i18n;
pub mod network;

#[cfg(test)]
pub(crate) mod testing;
