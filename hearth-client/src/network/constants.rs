//! Network module constants

use std::time::Duration;

/// Timeout for opening the socket and completing the auth handshake
pub const CONNECTION_TIMEOUT: Duration = Duration::from_secs(30);

/// First id handed out on a fresh connection
pub const FIRST_REQUEST_ID: u64 = 1;
