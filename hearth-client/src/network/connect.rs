//! Connection establishment and auth handshake

use futures_util::StreamExt;
use tokio::time::timeout;

use hearth_common::protocol::{AuthMessage, ServerMessage};

use super::connection::Connection;
use super::constants::CONNECTION_TIMEOUT;
use super::stream::{read_server_message, send_json};
use super::types::{ConnectError, ConnectionParams, Reader, Writer, websocket_url};

/// Connect to the dashboard and authenticate with the access token
///
/// The whole sequence (socket, `auth_required`, `auth`, `auth_ok`) is
/// bounded by [`CONNECTION_TIMEOUT`].
pub async fn connect(params: ConnectionParams) -> Result<Connection, ConnectError> {
    let url = websocket_url(&params.server_url)?;
    tracing::info!(%url, "connecting");

    let connection = timeout(CONNECTION_TIMEOUT, establish(&url, &params.access_token))
        .await
        .map_err(|_| ConnectError::Timeout)??;

    tracing::info!(
        version = connection.server_version().unwrap_or("unknown"),
        "authenticated"
    );
    Ok(connection)
}

async fn establish(url: &str, access_token: &str) -> Result<Connection, ConnectError> {
    let (socket, _response) = tokio_tungstenite::connect_async(url)
        .await
        .map_err(|e| ConnectError::Io(e.to_string()))?;
    let (mut writer, mut reader) = socket.split();

    let server_version = authenticate(&mut reader, &mut writer, access_token).await?;
    Ok(Connection::start(reader, writer, server_version))
}

/// Run the auth handshake, returning the server version on success
async fn authenticate(
    reader: &mut Reader,
    writer: &mut Writer,
    access_token: &str,
) -> Result<Option<String>, ConnectError> {
    match next_message(reader).await? {
        ServerMessage::AuthRequired { .. } => {}
        other => return Err(ConnectError::Handshake(format!("{other:?}"))),
    }

    let auth = AuthMessage::Auth {
        access_token: access_token.to_string(),
    };
    send_json(writer, &auth)
        .await
        .map_err(|e| ConnectError::Io(e.to_string()))?;

    match next_message(reader).await? {
        ServerMessage::AuthOk { ha_version } => Ok(ha_version),
        ServerMessage::AuthInvalid { message } => Err(ConnectError::AuthInvalid(
            message.unwrap_or_else(|| "invalid access token".to_string()),
        )),
        other => Err(ConnectError::Handshake(format!("{other:?}"))),
    }
}

async fn next_message(reader: &mut Reader) -> Result<ServerMessage, ConnectError> {
    read_server_message(reader)
        .await
        .map_err(|e| ConnectError::Io(e.to_string()))?
        .ok_or(ConnectError::Closed)
}
