//! Views: pure functions from state to widgets

mod add_user;
mod layout;
mod users;

pub use layout::main_layout;
