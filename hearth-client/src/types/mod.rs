//! Application types: messages, UI identifiers and panel state

mod connection;
mod message;
mod ui;
mod users;

pub use connection::ConnectionStatus;
pub use message::Message;
pub use ui::InputId;
pub use users::UsersPanelState;
