//! Hearth Common Library
//!
//! Shared types, protocol messages, and validators for the Hearth
//! dashboard administration tools.

mod error_code;
pub mod protocol;
pub mod validators;

pub use error_code::{
    ERROR_CODE_CONNECTION_LOST, ERROR_CODE_INVALID_RESPONSE, ERROR_CODE_NOT_CONNECTED,
    ERROR_CODE_SEND_FAILED, ERROR_CODE_UNKNOWN_ERROR,
};

/// Group identifier for administrators
///
/// Members can manage users, integrations and the instance itself.
pub const SYSTEM_GROUP_ID_ADMIN: &str = "system-admin";

/// Group identifier for regular users
pub const SYSTEM_GROUP_ID_USER: &str = "system-users";

/// Default HTTP/websocket port of the dashboard
pub const DEFAULT_PORT: u16 = 8123;

/// Path of the websocket API endpoint on the dashboard
pub const WEBSOCKET_PATH: &str = "/api/websocket";

/// Pick the group a new user is placed in
///
/// Users are created with exactly one group: administrators go into
/// [`SYSTEM_GROUP_ID_ADMIN`], everyone else into [`SYSTEM_GROUP_ID_USER`].
#[must_use]
pub fn group_id_for(is_admin: bool) -> &'static str {
    if is_admin {
        SYSTEM_GROUP_ID_ADMIN
    } else {
        SYSTEM_GROUP_ID_USER
    }
}
