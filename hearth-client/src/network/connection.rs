//! Authenticated dashboard session

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::{Mutex, mpsc, oneshot, watch};

use hearth_common::protocol::{Command, Request, User, UserCreateResult};

use crate::api::{ApiError, UserApi};

use super::constants::FIRST_REQUEST_ID;
use super::stream::{PendingMap, ShutdownHandle, spawn_reader_writer_tasks};
use super::types::{Reader, Writer};

/// A live, authenticated websocket session
///
/// Cheap to share behind an `Arc`; every method takes `&self`. Commands are
/// numbered from 1 and matched to their results by id, so several requests
/// may be in flight at once.
pub struct Connection {
    tx: mpsc::UnboundedSender<Request>,
    pending: PendingMap,
    next_id: AtomicU64,
    closed: watch::Receiver<bool>,
    shutdown: std::sync::Mutex<Option<ShutdownHandle>>,
    server_version: Option<String>,
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("server_version", &self.server_version)
            .field("next_id", &self.next_id.load(Ordering::Relaxed))
            .field("closed", &self.is_closed())
            .finish()
    }
}

impl Connection {
    /// Take over an authenticated socket and start its tasks
    pub(super) fn start(reader: Reader, writer: Writer, server_version: Option<String>) -> Self {
        let (tx, cmd_rx) = mpsc::unbounded_channel();
        let pending: PendingMap = Arc::new(Mutex::new(HashMap::new()));
        let (shutdown, closed) =
            spawn_reader_writer_tasks(reader, writer, cmd_rx, Arc::clone(&pending));

        Self {
            tx,
            pending,
            next_id: AtomicU64::new(FIRST_REQUEST_ID),
            closed,
            shutdown: std::sync::Mutex::new(Some(shutdown)),
            server_version,
        }
    }

    /// Version string reported by the server during the handshake
    pub fn server_version(&self) -> Option<&str> {
        self.server_version.as_deref()
    }

    /// Whether the socket has gone away
    pub fn is_closed(&self) -> bool {
        *self.closed.borrow()
    }

    /// Resolve once the socket has gone away
    pub async fn closed(&self) {
        let mut closed = self.closed.clone();
        // A dropped sender means the reader task is gone as well
        let _ = closed.wait_for(|closed| *closed).await;
    }

    /// Close the socket; later calls do nothing
    pub fn shutdown(&self) {
        let handle = match self.shutdown.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        if let Some(handle) = handle {
            handle.shutdown();
        }
    }

    /// Send a command and wait for its result payload
    pub async fn send(&self, command: Command) -> Result<Option<Value>, ApiError> {
        let (tx, rx) = oneshot::channel();

        let id = {
            let mut pending = self.pending.lock().await;
            if self.is_closed() {
                return Err(ApiError::ConnectionLost);
            }
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            pending.insert(id, tx);
            id
        };

        if self.tx.send(Request::new(id, command)).is_err() {
            self.pending.lock().await.remove(&id);
            return Err(ApiError::Send("connection writer stopped".to_string()));
        }

        rx.await.unwrap_or(Err(ApiError::ConnectionLost))
    }

    async fn request<T: DeserializeOwned>(&self, command: Command) -> Result<T, ApiError> {
        let name = command.name();
        let payload = self.send(command).await?.unwrap_or(Value::Null);
        serde_json::from_value(payload)
            .map_err(|e| ApiError::InvalidResponse(format!("{name}: {e}")))
    }
}

#[async_trait]
impl UserApi for Connection {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.request(Command::UserList).await
    }

    async fn create_user(&self, name: &str, group_ids: &[String]) -> Result<User, ApiError> {
        let created: UserCreateResult = self
            .request(Command::UserCreate {
                name: name.to_string(),
                group_ids: group_ids.to_vec(),
            })
            .await?;
        Ok(created.user)
    }

    async fn create_auth_for_user(
        &self,
        user_id: &str,
        username: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        self.send(Command::CredentialCreate {
            user_id: user_id.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        })
        .await
        .map(|_| ())
    }

    async fn delete_user(&self, user_id: &str) -> Result<(), ApiError> {
        self.send(Command::UserDelete {
            user_id: user_id.to_string(),
        })
        .await
        .map(|_| ())
    }
}
