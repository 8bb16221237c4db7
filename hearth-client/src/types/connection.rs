//! Connection status shown in the users panel

use std::sync::Arc;

use hearth_client::network::Connection;

/// Where the client stands with the dashboard
#[derive(Debug, Clone, Default)]
pub enum ConnectionStatus {
    /// Not connected yet
    #[default]
    Disconnected,
    /// Connect attempt failed or the socket dropped
    Failed(String),
    /// Handshake in progress with the given server
    Connecting(String),
    /// Authenticated session
    Connected(Arc<Connection>),
}

impl ConnectionStatus {
    /// The live connection, if any
    pub fn connection(&self) -> Option<Arc<Connection>> {
        match self {
            Self::Connected(connection) => Some(Arc::clone(connection)),
            _ => None,
        }
    }

    /// Whether a new connect attempt makes sense
    pub fn can_connect(&self) -> bool {
        matches!(self, Self::Disconnected | Self::Failed(_))
    }
}
