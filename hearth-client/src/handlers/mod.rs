//! Message handlers, grouped by feature

mod add_user;
mod connection;
mod keyboard;
mod users;
