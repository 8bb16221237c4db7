//! Application messages

use std::sync::Arc;

use iced::{Event, window};

use hearth_client::api::ApiError;
use hearth_client::dialog::AddUserField;
use hearth_client::network::{ConnectError, Connection};
use hearth_common::protocol::User;

/// Messages that drive the application state machine
#[derive(Debug, Clone)]
pub enum Message {
    // Events
    /// Keyboard and window events not consumed by a widget
    Event(Event),
    /// Left mouse button released anywhere in the window
    PointerReleased,
    /// Plain Tab pressed
    TabPressed,
    /// Window close button pressed
    WindowCloseRequested(window::Id),
    /// Window size queried, save it and close
    WindowSaveAndClose {
        id: window::Id,
        width: f32,
        height: f32,
    },

    // Connection
    /// Connect (or reconnect) to the dashboard
    Connect,
    /// Connect attempt finished
    Connected(Result<Arc<Connection>, ConnectError>),
    /// The socket went away
    ConnectionClosed,

    // Users panel
    /// User list arrived
    UsersLoaded(Result<Vec<User>, ApiError>),
    /// "Add user" pressed
    OpenAddUser,
    /// The add-user dialog finished creating a user
    UserAdded(User),

    // Add user dialog
    AddUserNameChanged(String),
    AddUserUsernameChanged(String),
    AddUserPasswordChanged(String),
    AddUserAdminToggled(bool),
    AddUserSubmit,
    AddUserCancel,
    /// Remote creation finished
    AddUserFinished(Result<User, ApiError>),
    /// Tab pressed in the dialog; carries the input that had focus
    AddUserTabFocusResult(Option<AddUserField>),
    /// Pointer released over the dialog; carries the input that now has focus
    AddUserPointerFocusResult(Option<AddUserField>),
}
