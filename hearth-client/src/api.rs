//! Remote user administration API
//!
//! `UserApi` is the seam between the dialog logic and the transport. The
//! websocket [`Connection`](crate::network::Connection) implements it for
//! real use; tests substitute in-memory fakes.

use async_trait::async_trait;
use hearth_common::protocol::User;
use hearth_common::{
    ERROR_CODE_CONNECTION_LOST, ERROR_CODE_INVALID_RESPONSE, ERROR_CODE_NOT_CONNECTED,
    ERROR_CODE_SEND_FAILED,
};

/// Failure of a remote call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with `success: false`
    #[error("{code}: {message}")]
    Remote { code: String, message: String },

    /// The socket closed before the result arrived
    #[error("connection lost")]
    ConnectionLost,

    /// No connection has been established
    #[error("not connected")]
    NotConnected,

    /// The command could not be handed to the socket writer
    #[error("failed to send command: {0}")]
    Send(String),

    /// The result payload did not have the expected shape
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Build a remote error from its code and message
    pub fn remote(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Remote {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Machine-readable code shown to the user
    ///
    /// Remote errors yield the server's code unchanged; transport failures
    /// yield the client-side codes from `hearth_common`.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Remote { code, .. } => code,
            Self::ConnectionLost => ERROR_CODE_CONNECTION_LOST,
            Self::NotConnected => ERROR_CODE_NOT_CONNECTED,
            Self::Send(_) => ERROR_CODE_SEND_FAILED,
            Self::InvalidResponse(_) => ERROR_CODE_INVALID_RESPONSE,
        }
    }
}

/// User administration operations offered by the dashboard
#[async_trait]
pub trait UserApi: Send + Sync {
    /// List every user known to the auth system
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;

    /// Create a user record in the given groups
    async fn create_user(&self, name: &str, group_ids: &[String]) -> Result<User, ApiError>;

    /// Attach username/password credentials to an existing user
    async fn create_auth_for_user(
        &self,
        user_id: &str,
        username: &str,
        password: &str,
    ) -> Result<(), ApiError>;

    /// Delete a user record
    async fn delete_user(&self, user_id: &str) -> Result<(), ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_code_is_verbatim() {
        let err = ApiError::remote("username_exists", "Username already exists");
        assert_eq!(err.code(), "username_exists");
        assert_eq!(err.to_string(), "username_exists: Username already exists");
    }

    #[test]
    fn test_transport_codes() {
        assert_eq!(ApiError::ConnectionLost.code(), "connection_lost");
        assert_eq!(ApiError::NotConnected.code(), "not_connected");
        assert_eq!(ApiError::Send("closed".into()).code(), "send_failed");
        assert_eq!(
            ApiError::InvalidResponse("missing user".into()).code(),
            "invalid_response"
        );
    }
}
