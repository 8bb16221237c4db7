//! Websocket client against an in-process dashboard stand-in

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use serde_json::{Value, json};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use tokio_tungstenite::WebSocketStream;
use tokio_tungstenite::tungstenite::Message;

use hearth_client::api::{ApiError, UserApi};
use hearth_client::dialog::{NewUserRequest, create_user_with_credentials};
use hearth_client::network::{ConnectError, Connection, ConnectionParams, connect};

const TOKEN: &str = "good-token";

type ServerSocket = WebSocketStream<TcpStream>;

async fn send(ws: &mut ServerSocket, value: Value) {
    ws.send(Message::text(value.to_string())).await.unwrap();
}

async fn recv(ws: &mut ServerSocket) -> Option<Value> {
    while let Some(frame) = ws.next().await {
        match frame.ok()? {
            Message::Text(text) => return Some(serde_json::from_str(text.as_str()).unwrap()),
            Message::Close(_) => return None,
            _ => {}
        }
    }
    None
}

fn result(id: &Value, payload: Value) -> Value {
    json!({"id": id, "type": "result", "success": true, "result": payload})
}

fn failure(id: &Value, code: &str, message: &str) -> Value {
    json!({
        "id": id,
        "type": "result",
        "success": false,
        "error": {"code": code, "message": message},
    })
}

fn user_json(id: &str, name: &str, groups: &[&str]) -> Value {
    json!({
        "id": id,
        "name": name,
        "is_owner": false,
        "is_active": true,
        "system_generated": false,
        "group_ids": groups,
        "credentials": [],
    })
}

/// Accept one client and run the auth handshake; `None` if the token was wrong
async fn accept(listener: &TcpListener) -> Option<ServerSocket> {
    let (stream, _) = listener.accept().await.unwrap();
    let mut ws = tokio_tungstenite::accept_async(stream).await.unwrap();
    send(&mut ws, json!({"type": "auth_required", "ha_version": "2024.1.0"})).await;

    let auth = recv(&mut ws).await.unwrap();
    assert_eq!(auth["type"], "auth");
    if auth["access_token"] == TOKEN {
        send(&mut ws, json!({"type": "auth_ok", "ha_version": "2024.1.0"})).await;
        Some(ws)
    } else {
        send(
            &mut ws,
            json!({"type": "auth_invalid", "message": "Invalid access token or password"}),
        )
        .await;
        let _ = ws.close(None).await;
        None
    }
}

/// Start a server running `script` on the authenticated socket
async fn serve<F, Fut>(script: F) -> (String, JoinHandle<Vec<Value>>)
where
    F: FnOnce(ServerSocket) -> Fut + Send + 'static,
    Fut: std::future::Future<Output = Vec<Value>> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("ws://{}", listener.local_addr().unwrap());
    let handle = tokio::spawn(async move {
        match accept(&listener).await {
            Some(ws) => script(ws).await,
            None => Vec::new(),
        }
    });
    (url, handle)
}

async fn connect_to(url: &str, token: &str) -> Result<Connection, ConnectError> {
    connect(ConnectionParams {
        server_url: url.to_string(),
        access_token: token.to_string(),
    })
    .await
}

/// Answer every command with `answer` until the client disconnects
async fn answer_all(mut ws: ServerSocket, answer: fn(&Value) -> Value) -> Vec<Value> {
    let mut seen = Vec::new();
    while let Some(command) = recv(&mut ws).await {
        send(&mut ws, answer(&command)).await;
        seen.push(command);
    }
    seen
}

// =============================================================================
// Handshake
// =============================================================================

#[tokio::test]
async fn test_connect_reports_server_version() {
    let (url, _server) = serve(|ws| answer_all(ws, |c| result(&c["id"], Value::Null))).await;

    let connection = connect_to(&url, TOKEN).await.unwrap();

    assert_eq!(connection.server_version(), Some("2024.1.0"));
    assert!(!connection.is_closed());
    connection.shutdown();
}

#[tokio::test]
async fn test_connect_rejects_invalid_token() {
    let (url, _server) = serve(|_ws| async { Vec::new() }).await;

    let err = connect_to(&url, "wrong").await.unwrap_err();

    assert!(matches!(err, ConnectError::AuthInvalid(ref message) if message.contains("Invalid")));
}

#[tokio::test]
async fn test_connect_refused() {
    // Bind and drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("ws://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = connect_to(&url, TOKEN).await.unwrap_err();

    assert!(matches!(err, ConnectError::Io(_)));
}

// =============================================================================
// Commands
// =============================================================================

#[tokio::test]
async fn test_list_users_and_request_ids() {
    let (url, server) = serve(|ws| {
        answer_all(ws, |c| {
            result(
                &c["id"],
                json!([
                    user_json("a", "Owner", &["system-admin"]),
                    user_json("b", "Jane", &["system-users"]),
                ]),
            )
        })
    })
    .await;
    let connection = connect_to(&url, TOKEN).await.unwrap();

    let users = connection.list_users().await.unwrap();
    let again = connection.list_users().await.unwrap();
    connection.shutdown();
    let seen = server.await.unwrap();

    assert_eq!(users.len(), 2);
    assert!(users[0].is_admin());
    assert!(!users[1].is_admin());
    assert_eq!(again, users);
    assert_eq!(seen[0], json!({"id": 1, "type": "config/auth/list"}));
    assert_eq!(seen[1]["id"], 2);
}

#[tokio::test]
async fn test_results_matched_by_id() {
    let (url, _server) = serve(|mut ws| async move {
        let first = recv(&mut ws).await.unwrap();
        let second = recv(&mut ws).await.unwrap();
        // Answer in reverse order
        send(&mut ws, failure(&second["id"], "not_found", "User not found")).await;
        send(&mut ws, result(&first["id"], Value::Null)).await;
        let _ = recv(&mut ws).await;
        vec![first, second]
    })
    .await;
    let connection = connect_to(&url, TOKEN).await.unwrap();

    let (first, second) = tokio::join!(connection.delete_user("u1"), async {
        // Make sure the second command is written after the first
        tokio::time::sleep(Duration::from_millis(50)).await;
        connection.delete_user("missing").await
    });

    assert_eq!(first, Ok(()));
    assert_eq!(second, Err(ApiError::remote("not_found", "User not found")));
}

#[tokio::test]
async fn test_remote_error_code_is_kept() {
    let (url, _server) =
        serve(|ws| answer_all(ws, |c| failure(&c["id"], "unauthorized", "Unauthorized"))).await;
    let connection = connect_to(&url, TOKEN).await.unwrap();

    let err = connection
        .create_user("Jane", &["system-users".to_string()])
        .await
        .unwrap_err();

    assert_eq!(err.code(), "unauthorized");
}

#[tokio::test]
async fn test_failure_without_error_is_unknown_error() {
    let (url, _server) = serve(|ws| {
        answer_all(ws, |c| json!({"id": c["id"], "type": "result", "success": false}))
    })
    .await;
    let connection = connect_to(&url, TOKEN).await.unwrap();

    let err = connection.delete_user("u1").await.unwrap_err();

    assert_eq!(err.code(), "unknown_error");
}

#[tokio::test]
async fn test_unexpected_payload_is_invalid_response() {
    let (url, _server) = serve(|ws| answer_all(ws, |c| result(&c["id"], json!({"nope": 1})))).await;
    let connection = connect_to(&url, TOKEN).await.unwrap();

    let err = connection
        .create_user("Jane", &["system-users".to_string()])
        .await
        .unwrap_err();

    assert_eq!(err.code(), "invalid_response");
}

#[tokio::test]
async fn test_pending_request_fails_when_socket_closes() {
    let (url, _server) = serve(|mut ws| async move {
        let command = recv(&mut ws).await.unwrap();
        let _ = ws.close(None).await;
        vec![command]
    })
    .await;
    let connection = connect_to(&url, TOKEN).await.unwrap();

    let err = connection.list_users().await.unwrap_err();
    assert_eq!(err, ApiError::ConnectionLost);

    tokio::time::timeout(Duration::from_secs(5), connection.closed())
        .await
        .unwrap();
    assert!(connection.is_closed());
    assert_eq!(
        connection.delete_user("u1").await,
        Err(ApiError::ConnectionLost)
    );
}

// =============================================================================
// Two-step creation
// =============================================================================

fn request() -> NewUserRequest {
    NewUserRequest {
        name: "Jane Doe".to_string(),
        username: "jane".to_string(),
        password: "hunter2".to_string(),
        group_id: "system-admin",
    }
}

#[tokio::test]
async fn test_create_user_with_credentials() {
    let (url, server) = serve(|ws| {
        answer_all(ws, |c| match c["type"].as_str() {
            Some("config/auth/create") => result(
                &c["id"],
                json!({"user": user_json("new-id", "Jane Doe", &["system-admin"])}),
            ),
            _ => result(&c["id"], Value::Null),
        })
    })
    .await;
    let connection = connect_to(&url, TOKEN).await.unwrap();

    let user = create_user_with_credentials(&connection, &request())
        .await
        .unwrap();
    connection.shutdown();
    let seen = server.await.unwrap();

    assert_eq!(user.id, "new-id");
    assert!(user.is_admin());
    assert_eq!(
        seen,
        vec![
            json!({
                "id": 1,
                "type": "config/auth/create",
                "name": "Jane Doe",
                "group_ids": ["system-admin"],
            }),
            json!({
                "id": 2,
                "type": "config/auth_provider/homeassistant/create",
                "user_id": "new-id",
                "username": "jane",
                "password": "hunter2",
            }),
        ]
    );
}

#[tokio::test]
async fn test_credential_failure_deletes_user() {
    let (url, server) = serve(|ws| {
        answer_all(ws, |c| match c["type"].as_str() {
            Some("config/auth/create") => result(
                &c["id"],
                json!({"user": user_json("new-id", "Jane Doe", &["system-admin"])}),
            ),
            Some("config/auth_provider/homeassistant/create") => {
                failure(&c["id"], "username_exists", "Username already exists")
            }
            _ => result(&c["id"], Value::Null),
        })
    })
    .await;
    let connection = connect_to(&url, TOKEN).await.unwrap();

    let err = create_user_with_credentials(&connection, &request())
        .await
        .unwrap_err();
    connection.shutdown();
    let seen = server.await.unwrap();

    assert_eq!(err.code(), "username_exists");
    assert_eq!(seen.len(), 3);
    assert_eq!(
        seen[2],
        json!({"id": 3, "type": "config/auth/delete", "user_id": "new-id"})
    );
}
