//! Websocket connection to the dashboard

mod connect;
mod connection;
mod constants;
mod stream;
mod types;

pub use connect::connect;
pub use connection::Connection;
pub use types::{ConnectError, ConnectionParams, websocket_url};
