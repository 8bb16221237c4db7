//! Connection handlers

use std::sync::Arc;

use iced::Task;

use hearth_client::config::Config;
use hearth_client::i18n::{t, t_args};
use hearth_client::network::{self, ConnectError, Connection};

use crate::HearthApp;
use crate::types::{ConnectionStatus, Message};

impl HearthApp {
    /// Start connecting with the configured address and token
    pub fn handle_connect(&mut self) -> Task<Message> {
        if !self.connection.can_connect() {
            return Task::none();
        }

        let Some(params) = self.config.connection_params() else {
            let path = Config::config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            self.connection = ConnectionStatus::Failed(t_args(
                "connection-missing-token",
                &[("path", &path)],
            ));
            return Task::none();
        };

        self.connection = ConnectionStatus::Connecting(params.server_url.clone());
        self.users.clear();
        Task::perform(network::connect(params), |result| {
            Message::Connected(result.map(Arc::new))
        })
    }

    /// Store the session and load the user list, or show why it failed
    pub fn handle_connected(
        &mut self,
        result: Result<Arc<Connection>, ConnectError>,
    ) -> Task<Message> {
        match result {
            Ok(connection) => {
                self.connection = ConnectionStatus::Connected(Arc::clone(&connection));
                let watch = Task::perform(
                    async move { connection.closed().await },
                    |()| Message::ConnectionClosed,
                );
                Task::batch([self.load_users(), watch])
            }
            Err(e) => {
                tracing::warn!(error = %e, "connect failed");
                self.connection = ConnectionStatus::Failed(t_args(
                    "connection-failed",
                    &[("error", &e.to_string())],
                ));
                Task::none()
            }
        }
    }

    /// The socket dropped; in-flight requests fail on their own
    pub fn handle_connection_closed(&mut self) -> Task<Message> {
        if matches!(self.connection, ConnectionStatus::Connected(_)) {
            self.connection = ConnectionStatus::Failed(t("connection-lost"));
        }
        Task::none()
    }
}
