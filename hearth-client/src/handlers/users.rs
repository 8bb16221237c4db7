//! Users panel handlers

use iced::Task;
use iced::widget::{Id, operation};

use hearth_client::api::{ApiError, UserApi};
use hearth_client::dialog::AddUserDialogParams;
use hearth_client::i18n::t_args;
use hearth_common::protocol::User;

use crate::HearthApp;
use crate::types::{InputId, Message};

impl HearthApp {
    /// Request the user list
    pub fn load_users(&mut self) -> Task<Message> {
        let Some(connection) = self.connection.connection() else {
            return Task::none();
        };
        self.users.clear();
        Task::perform(
            async move { connection.list_users().await },
            Message::UsersLoaded,
        )
    }

    /// Store the loaded list or its error
    pub fn handle_users_loaded(&mut self, result: Result<Vec<User>, ApiError>) -> Task<Message> {
        match result {
            Ok(users) => {
                tracing::debug!(count = users.len(), "users loaded");
                self.users.set_users(users);
            }
            Err(e) => {
                tracing::warn!(code = e.code(), "failed to load users");
                self.users
                    .set_error(t_args("users-error", &[("error", e.code())]));
            }
        }
        Task::none()
    }

    /// Open the add-user dialog and focus its first field
    pub fn handle_open_add_user(&mut self) -> Task<Message> {
        self.add_user
            .open(AddUserDialogParams::new(Message::UserAdded));
        operation::focus(Id::from(InputId::AddUserName))
    }

    /// Completion callback of the dialog
    pub fn handle_user_added(&mut self, user: User) -> Task<Message> {
        self.users.insert(user);
        Task::none()
    }
}
