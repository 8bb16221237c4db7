//! Input validation functions
//!
//! Validators for the fields of the add-user form. The client uses them for
//! inline field hints; the server remains the authority and reports its own
//! error codes.

mod name;
mod password;
mod username;

pub use name::{MAX_NAME_LENGTH, NameError, validate_name};
pub use password::{MAX_PASSWORD_LENGTH, PasswordError, validate_password};
pub use username::{MAX_USERNAME_LENGTH, UsernameError, validate_username};
