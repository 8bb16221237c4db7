//! Add-user dialog handlers

use iced::Task;
use iced::widget::{Id, operation};

use hearth_client::api::ApiError;
use hearth_client::dialog::{AddUserField, create_user_with_credentials};
use hearth_common::protocol::User;

use crate::HearthApp;
use crate::types::{InputId, Message};

impl HearthApp {
    // ==================== Field Edits ====================

    pub fn handle_add_user_name_changed(&mut self, name: String) -> Task<Message> {
        self.add_user.set_name(name);
        Task::none()
    }

    pub fn handle_add_user_username_changed(&mut self, username: String) -> Task<Message> {
        self.add_user.set_username(username);
        Task::none()
    }

    pub fn handle_add_user_password_changed(&mut self, password: String) -> Task<Message> {
        self.add_user.set_password(password);
        Task::none()
    }

    pub fn handle_add_user_admin_toggled(&mut self, is_admin: bool) -> Task<Message> {
        self.add_user.set_admin(is_admin);
        Task::none()
    }

    // ==================== Submit / Cancel ====================

    /// Start the two-step creation if the form allows it
    pub fn handle_add_user_submit(&mut self) -> Task<Message> {
        let Some(request) = self.add_user.begin_submit() else {
            return Task::none();
        };
        let Some(connection) = self.connection.connection() else {
            return Task::done(Message::AddUserFinished(Err(ApiError::NotConnected)));
        };
        Task::perform(
            async move { create_user_with_credentials(connection.as_ref(), &request).await },
            Message::AddUserFinished,
        )
    }

    /// Apply the creation outcome; success feeds the completion message back
    pub fn handle_add_user_finished(&mut self, result: Result<User, ApiError>) -> Task<Message> {
        match self.add_user.finish_submit(result) {
            Some(message) => self.update(message),
            None => Task::none(),
        }
    }

    pub fn handle_add_user_cancel(&mut self) -> Task<Message> {
        self.add_user.cancel();
        Task::none()
    }

    // ==================== Focus Tracking ====================

    /// Tab in the dialog: find the focused input, then move to the next one
    pub fn handle_add_user_tab_pressed(&mut self) -> Task<Message> {
        focused_input().map(Message::AddUserTabFocusResult)
    }

    /// Move focus to the input after `focused`
    pub fn handle_add_user_tab_focus_result(
        &mut self,
        focused: Option<AddUserField>,
    ) -> Task<Message> {
        let next = match focused {
            Some(field) => input_for(field).map_or(InputId::AddUserName, InputId::next),
            None => InputId::AddUserName,
        };
        self.add_user.focus(next.field());
        operation::focus(Id::from(next))
    }

    /// A click may have moved focus; find out where it went
    pub fn handle_pointer_released(&mut self) -> Task<Message> {
        if !self.add_user.is_open() {
            return Task::none();
        }
        focused_input().map(Message::AddUserPointerFocusResult)
    }

    /// Sync the dialog's focus with the widgets after a click
    pub fn handle_add_user_pointer_focus_result(
        &mut self,
        focused: Option<AddUserField>,
    ) -> Task<Message> {
        match focused {
            Some(field) => self.add_user.focus(field),
            // The admin checkbox tracks focus through its toggle message
            None if self.add_user.focused() == Some(AddUserField::Admin) => {}
            None => self.add_user.blur(),
        }
        Task::none()
    }
}

/// Query which dialog input currently has keyboard focus
fn focused_input() -> Task<Option<AddUserField>> {
    Task::batch(
        InputId::ADD_USER_ORDER
            .map(|id| operation::is_focused(Id::from(id)).map(move |focused| (id, focused))),
    )
    .collect()
    .map(|results: Vec<(InputId, bool)>| {
        results
            .into_iter()
            .find(|(_, focused)| *focused)
            .map(|(id, _)| id.field())
    })
}

fn input_for(field: AddUserField) -> Option<InputId> {
    InputId::ADD_USER_ORDER
        .into_iter()
        .find(|id| id.field() == field)
}
