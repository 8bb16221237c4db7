//! Network module type aliases and internal types

use futures_util::stream::{SplitSink, SplitStream};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

use hearth_common::{DEFAULT_PORT, WEBSOCKET_PATH};

/// Parameters for connecting to a dashboard
#[derive(Clone)]
pub struct ConnectionParams {
    /// Base address of the dashboard (`http://host:8123`, `wss://...`, or `host`)
    pub server_url: String,
    /// Long-lived access token of an administrator
    pub access_token: String,
}

impl std::fmt::Debug for ConnectionParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionParams")
            .field("server_url", &self.server_url)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

/// Failure to establish an authenticated session
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectError {
    /// The configured address cannot be turned into a websocket URL
    #[error("invalid server address: {0}")]
    InvalidUrl(String),

    /// Socket or handshake did not complete in time
    #[error("connection timed out")]
    Timeout,

    /// Opening the socket failed
    #[error("connection failed: {0}")]
    Io(String),

    /// The server rejected the access token
    #[error("authentication failed: {0}")]
    AuthInvalid(String),

    /// The server sent something other than the expected handshake message
    #[error("unexpected handshake message: {0}")]
    Handshake(String),

    /// The socket closed during the handshake
    #[error("connection closed during handshake")]
    Closed,
}

/// Type alias for the websocket stream (plain or TLS)
pub type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Type alias for the read half
pub type Reader = SplitStream<WsStream>;

/// Type alias for the write half
pub type Writer = SplitSink<WsStream, WsMessage>;

/// Turn a configured server address into the websocket endpoint URL
///
/// `http`/`https` map to `ws`/`wss`. A bare host gets `ws://` and the
/// default port. The API path is appended unless already present.
pub fn websocket_url(server_url: &str) -> Result<String, ConnectError> {
    let trimmed = server_url.trim();
    let invalid = || ConnectError::InvalidUrl(server_url.to_string());

    let (scheme, rest, explicit_scheme) = match trimmed.split_once("://") {
        Some((scheme, rest)) => match scheme.to_ascii_lowercase().as_str() {
            "http" | "ws" => ("ws", rest, true),
            "https" | "wss" => ("wss", rest, true),
            _ => return Err(invalid()),
        },
        None => ("ws", trimmed, false),
    };

    let (authority, path) = match rest.find('/') {
        Some(index) => rest.split_at(index),
        None => (rest, ""),
    };
    if authority.is_empty() || authority.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let authority = if explicit_scheme || has_port(authority) {
        authority.to_string()
    } else {
        format!("{authority}:{DEFAULT_PORT}")
    };

    let path = path.trim_end_matches('/');
    let path = if path.ends_with(WEBSOCKET_PATH) {
        path.to_string()
    } else {
        format!("{path}{WEBSOCKET_PATH}")
    };

    Ok(format!("{scheme}://{authority}{path}"))
}

fn has_port(authority: &str) -> bool {
    // `[::1]` has colons but no port
    if authority.ends_with(']') {
        return false;
    }
    authority
        .rsplit_once(':')
        .is_some_and(|(_, port)| !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()))
}
