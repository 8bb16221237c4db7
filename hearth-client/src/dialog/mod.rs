//! Dialog controllers
//!
//! Widget-independent state for modal dialogs. Views render these, message
//! handlers mutate them.

mod add_user;
mod provision;

pub use add_user::{
    AddUserDialog, AddUserDialogParams, AddUserField, NewUserRequest, UserAddedCallback,
    suggest_username,
};
pub use provision::create_user_with_credentials;
