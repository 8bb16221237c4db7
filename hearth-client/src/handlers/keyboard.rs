//! Keyboard event handling

use iced::keyboard::{self, key};
use iced::{Event, Task};

use crate::HearthApp;
use crate::types::Message;

impl HearthApp {
    /// Handle Tab, Enter and Escape
    pub fn handle_keyboard_event(&mut self, event: Event) -> Task<Message> {
        let Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event else {
            return Task::none();
        };

        match key {
            keyboard::Key::Named(key::Named::Tab)
                if !modifiers.command() && !modifiers.shift() =>
            {
                self.update(Message::TabPressed)
            }
            // Inputs submit on their own; this covers the checkbox and buttons
            keyboard::Key::Named(key::Named::Enter) if self.add_user.is_open() => {
                self.update(Message::AddUserSubmit)
            }
            keyboard::Key::Named(key::Named::Escape) if self.add_user.is_open() => {
                self.update(Message::AddUserCancel)
            }
            _ => Task::none(),
        }
    }

    /// Cycle focus through the open form
    pub fn handle_tab_navigation(&mut self) -> Task<Message> {
        if self.add_user.is_open() {
            return self.handle_add_user_tab_pressed();
        }
        Task::none()
    }
}
