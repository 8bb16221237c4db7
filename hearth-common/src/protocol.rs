//! Protocol definitions for the dashboard websocket API
//!
//! All messages are JSON text frames. A session starts with the server
//! sending `auth_required`; the client answers with an `auth` message
//! carrying a long-lived access token and the server replies `auth_ok` or
//! `auth_invalid`. After that every client command carries a numeric `id`
//! which the server echoes back in the matching `result` message.
//!
//! ## Password Security
//!
//! Credential passwords travel in plaintext inside the command payload, so
//! the transport must be TLS (`wss://`) outside of a trusted LAN. `Debug`
//! output of every message redacts passwords and tokens.

use serde::{Deserialize, Serialize};

use crate::SYSTEM_GROUP_ID_ADMIN;

fn default_true() -> bool {
    true
}

// =============================================================================
// Client -> Server
// =============================================================================

/// Authentication message, the only client message without an `id`
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthMessage {
    /// Answer to `auth_required`
    Auth { access_token: String },
}

/// Commands available once authenticated
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    /// List all users known to the auth system
    #[serde(rename = "config/auth/list")]
    UserList,
    /// Create a user record (no login credentials yet)
    #[serde(rename = "config/auth/create")]
    UserCreate {
        name: String,
        group_ids: Vec<String>,
    },
    /// Delete a user record and everything attached to it
    #[serde(rename = "config/auth/delete")]
    UserDelete { user_id: String },
    /// Attach username/password credentials to an existing user
    #[serde(rename = "config/auth_provider/homeassistant/create")]
    CredentialCreate {
        user_id: String,
        username: String,
        password: String,
    },
}

impl Command {
    /// Wire name of the command, handy for logging
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::UserList => "config/auth/list",
            Self::UserCreate { .. } => "config/auth/create",
            Self::UserDelete { .. } => "config/auth/delete",
            Self::CredentialCreate { .. } => "config/auth_provider/homeassistant/create",
        }
    }
}

/// A command paired with its request id
///
/// Serializes flat: `{"id": 3, "type": "config/auth/create", ...}`.
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    pub id: u64,
    #[serde(flatten)]
    pub command: Command,
}

impl Request {
    /// Pair a command with an id
    #[must_use]
    pub fn new(id: u64, command: Command) -> Self {
        Self { id, command }
    }
}

// =============================================================================
// Server -> Client
// =============================================================================

/// Error payload of a failed result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Machine-readable code, shown to the user verbatim
    pub code: String,
    /// Human-readable explanation (English, from the server)
    #[serde(default)]
    pub message: String,
}

/// Server messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// First message of every session
    AuthRequired {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ha_version: Option<String>,
    },
    /// Token accepted
    AuthOk {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ha_version: Option<String>,
    },
    /// Token rejected; the server closes the socket afterwards
    AuthInvalid {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Outcome of a command
    Result {
        id: u64,
        success: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        result: Option<serde_json::Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        error: Option<ErrorInfo>,
    },
    /// Events and anything newer than this client understands
    #[serde(other)]
    Unknown,
}

/// Credential attached to a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Auth provider type, e.g. `homeassistant`
    #[serde(rename = "type")]
    pub provider_type: String,
}

/// A user record as reported by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque identifier assigned by the server
    pub id: String,
    /// Display name
    pub name: String,
    /// Instance owner (cannot be deleted)
    #[serde(default)]
    pub is_owner: bool,
    /// Whether the user may log in
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Internal users created by integrations
    #[serde(default)]
    pub system_generated: bool,
    /// Group memberships
    #[serde(default)]
    pub group_ids: Vec<String>,
    /// Login credentials attached to the user
    #[serde(default)]
    pub credentials: Vec<Credential>,
}

impl User {
    /// Whether the user belongs to the administrator group
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.group_ids.iter().any(|g| g == SYSTEM_GROUP_ID_ADMIN)
    }
}

/// `result` payload of `config/auth/create`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCreateResult {
    pub user: User,
}

// =============================================================================
// Debug (redacted)
// =============================================================================

impl std::fmt::Debug for AuthMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthMessage::Auth { .. } => f
                .debug_struct("Auth")
                .field("access_token", &"<REDACTED>")
                .finish(),
        }
    }
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::UserList => f.write_str("UserList"),
            Command::UserCreate { name, group_ids } => f
                .debug_struct("UserCreate")
                .field("name", name)
                .field("group_ids", group_ids)
                .finish(),
            Command::UserDelete { user_id } => f
                .debug_struct("UserDelete")
                .field("user_id", user_id)
                .finish(),
            Command::CredentialCreate {
                user_id, username, ..
            } => f
                .debug_struct("CredentialCreate")
                .field("user_id", user_id)
                .field("username", username)
                .field("password", &"<REDACTED>")
                .finish(),
        }
    }
}
