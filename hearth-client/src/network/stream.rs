//! Reader and writer tasks for an authenticated socket

use std::collections::HashMap;
use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use serde::Serialize;
use serde_json::Value;
use tokio::sync::{Mutex, mpsc, oneshot, watch};
use tokio_tungstenite::tungstenite::{Error as WsError, Message as WsMessage};

use hearth_common::ERROR_CODE_UNKNOWN_ERROR;
use hearth_common::protocol::{ErrorInfo, Request, ServerMessage};

use crate::api::ApiError;

use super::types::{Reader, Writer};

/// Outcome delivered to a waiting request
pub(super) type Outcome = Result<Option<Value>, ApiError>;

/// Requests awaiting their `result`, keyed by id
pub(super) type PendingMap = Arc<Mutex<HashMap<u64, oneshot::Sender<Outcome>>>>;

/// Type alias for the command channel receiver
type CommandReceiver = mpsc::UnboundedReceiver<Request>;

/// Handle for shutting down a connection
#[derive(Debug)]
pub(super) struct ShutdownHandle {
    tx: oneshot::Sender<()>,
}

impl ShutdownHandle {
    /// Signal the writer task to close the socket
    pub(super) fn shutdown(self) {
        let _ = self.tx.send(());
    }
}

/// Read the next decodable server message
///
/// Control frames and binary frames are skipped, text frames that are not
/// valid server messages are logged and skipped. Returns `Ok(None)` once the
/// socket is closed.
pub(super) async fn read_server_message(
    reader: &mut Reader,
) -> Result<Option<ServerMessage>, WsError> {
    while let Some(frame) = reader.next().await {
        match frame? {
            WsMessage::Text(text) => match serde_json::from_str(text.as_str()) {
                Ok(message) => return Ok(Some(message)),
                Err(e) => tracing::warn!(error = %e, "ignoring undecodable message"),
            },
            WsMessage::Close(_) => return Ok(None),
            _ => {}
        }
    }
    Ok(None)
}

/// Serialize a value and write it as a text frame
pub(super) async fn send_json<T: Serialize>(writer: &mut Writer, value: &T) -> Result<(), WsError> {
    let json = serde_json::to_string(value).map_err(|e| {
        WsError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })?;
    writer.send(WsMessage::text(json)).await
}

/// Spawn the reader and writer tasks
///
/// Returns the shutdown handle and a watch that flips to `true` once the
/// socket is gone and every pending request has been failed.
pub(super) fn spawn_reader_writer_tasks(
    reader: Reader,
    writer: Writer,
    cmd_rx: CommandReceiver,
    pending: PendingMap,
) -> (ShutdownHandle, watch::Receiver<bool>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let (closed_tx, closed_rx) = watch::channel(false);

    let reader_pending = Arc::clone(&pending);
    tokio::spawn(async move {
        reader_task(reader, reader_pending, closed_tx).await;
    });

    tokio::spawn(async move {
        writer_task(writer, cmd_rx, shutdown_rx, pending).await;
    });

    (ShutdownHandle { tx: shutdown_tx }, closed_rx)
}

/// Reader task - routes results to their pending requests
///
/// Runs without `select!` so a frame is never dropped half-read. When the
/// socket ends it marks the connection closed and fails everything still
/// waiting with `connection_lost`.
async fn reader_task(mut reader: Reader, pending: PendingMap, closed_tx: watch::Sender<bool>) {
    loop {
        match read_server_message(&mut reader).await {
            Ok(Some(ServerMessage::Result {
                id,
                success,
                result,
                error,
            })) => {
                let outcome = if success {
                    Ok(result)
                } else {
                    let ErrorInfo { code, message } = error.unwrap_or_else(|| ErrorInfo {
                        code: ERROR_CODE_UNKNOWN_ERROR.to_string(),
                        message: String::new(),
                    });
                    Err(ApiError::Remote { code, message })
                };
                let waiter = pending.lock().await.remove(&id);
                match waiter {
                    Some(tx) => {
                        let _ = tx.send(outcome);
                    }
                    None => tracing::debug!(id, "result for unknown request"),
                }
            }
            Ok(Some(other)) => tracing::trace!(message = ?other, "ignoring server message"),
            Ok(None) => {
                tracing::info!("connection closed by server");
                break;
            }
            Err(e) => {
                tracing::warn!(error = %e, "connection read failed");
                break;
            }
        }
    }

    // Flag first so no new request is registered after the drain
    closed_tx.send_replace(true);
    let mut pending = pending.lock().await;
    for (_, tx) in pending.drain() {
        let _ = tx.send(Err(ApiError::ConnectionLost));
    }
}

/// Writer task - serialises commands onto the socket
///
/// `select!` is safe here because `cmd_rx.recv()` is cancel-safe.
async fn writer_task(
    mut writer: Writer,
    mut cmd_rx: CommandReceiver,
    mut shutdown_rx: oneshot::Receiver<()>,
    pending: PendingMap,
) {
    loop {
        tokio::select! {
            Some(request) = cmd_rx.recv() => {
                tracing::debug!(id = request.id, command = request.command.name(), "sending command");
                if let Err(e) = send_json(&mut writer, &request).await {
                    tracing::warn!(error = %e, "connection write failed");
                    if let Some(tx) = pending.lock().await.remove(&request.id) {
                        let _ = tx.send(Err(ApiError::Send(e.to_string())));
                    }
                    break;
                }
            }
            _ = &mut shutdown_rx => {
                tracing::debug!("closing connection");
                break;
            }
            // Every sender dropped
            else => break,
        }
    }
    let _ = writer.close().await;
}
