//! Add-user dialog state
//!
//! Holds the form fields of the "add user" modal and enforces its rules:
//! field edits clear the displayed error, leaving the name field suggests a
//! username, and a submission can only start when every required field is
//! filled and nothing is in flight. The remote calls themselves live in
//! [`create_user_with_credentials`](super::create_user_with_credentials).

use std::sync::Arc;

use hearth_common::group_id_for;
use hearth_common::protocol::User;

use crate::api::ApiError;

/// Completion handler invoked with the created user
///
/// The returned value is handed back to the caller of
/// [`AddUserDialog::finish_submit`]; the GUI uses it to produce an
/// application message.
pub type UserAddedCallback<M> = Arc<dyn Fn(User) -> M + Send + Sync>;

/// Parameters supplied by whoever opens the dialog
pub struct AddUserDialogParams<M> {
    /// Called exactly once, only after both the user and its credentials exist
    pub user_added: UserAddedCallback<M>,
}

impl<M> AddUserDialogParams<M> {
    /// Wrap a completion handler
    pub fn new(user_added: impl Fn(User) -> M + Send + Sync + 'static) -> Self {
        Self {
            user_added: Arc::new(user_added),
        }
    }
}

impl<M> Clone for AddUserDialogParams<M> {
    fn clone(&self) -> Self {
        Self {
            user_added: Arc::clone(&self.user_added),
        }
    }
}

impl<M> std::fmt::Debug for AddUserDialogParams<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddUserDialogParams")
            .field("user_added", &"<callback>")
            .finish()
    }
}

/// Focusable controls of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddUserField {
    Name,
    Username,
    Password,
    Admin,
}

/// Snapshot of the form taken when a submission starts
#[derive(Clone, PartialEq, Eq)]
pub struct NewUserRequest {
    /// Display name for the user record
    pub name: String,
    /// Login name for the credential
    pub username: String,
    /// Password for the credential
    pub password: String,
    /// The single group the user is created in
    pub group_id: &'static str,
}

impl std::fmt::Debug for NewUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUserRequest")
            .field("name", &self.name)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("group_id", &self.group_id)
            .finish()
    }
}

/// Fields the user has edited since the dialog opened
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Touched {
    name: bool,
    username: bool,
    password: bool,
}

/// Add-user dialog state
///
/// Closed when no params are stored. `M` is whatever the completion
/// callback produces.
pub struct AddUserDialog<M> {
    params: Option<AddUserDialogParams<M>>,
    name: String,
    username: String,
    password: String,
    is_admin: bool,
    loading: bool,
    error: Option<String>,
    focused: Option<AddUserField>,
    touched: Touched,
}

impl<M> Default for AddUserDialog<M> {
    fn default() -> Self {
        Self {
            params: None,
            name: String::new(),
            username: String::new(),
            password: String::new(),
            is_admin: false,
            loading: false,
            error: None,
            focused: None,
            touched: Touched::default(),
        }
    }
}

impl<M> std::fmt::Debug for AddUserDialog<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddUserDialog")
            .field("open", &self.is_open())
            .field("name", &self.name)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("is_admin", &self.is_admin)
            .field("loading", &self.loading)
            .field("error", &self.error)
            .field("focused", &self.focused)
            .finish()
    }
}

impl<M> AddUserDialog<M> {
    /// Create a closed dialog
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Lifecycle ====================

    /// Open the dialog with fresh fields
    pub fn open(&mut self, params: AddUserDialogParams<M>) {
        self.params = Some(params);
        self.name.clear();
        self.username.clear();
        self.password.clear();
        self.is_admin = false;
        self.error = None;
        self.loading = false;
        self.focused = Some(AddUserField::Name);
        self.touched = Touched::default();
    }

    /// Hide the dialog; calling it on a closed dialog does nothing
    pub fn close(&mut self) {
        self.params = None;
        self.focused = None;
    }

    /// Cancel action; ignored while a submission is in flight
    ///
    /// Returns whether the dialog was closed.
    pub fn cancel(&mut self) -> bool {
        if self.loading || !self.is_open() {
            return false;
        }
        self.close();
        true
    }

    // ==================== Field Edits ====================

    /// Replace the display name
    pub fn set_name(&mut self, name: String) {
        self.focus(AddUserField::Name);
        self.error = None;
        self.name = name;
        self.touched.name = true;
    }

    /// Replace the username
    pub fn set_username(&mut self, username: String) {
        self.focus(AddUserField::Username);
        self.error = None;
        self.username = username;
        self.touched.username = true;
    }

    /// Replace the password
    pub fn set_password(&mut self, password: String) {
        self.focus(AddUserField::Password);
        self.error = None;
        self.password = password;
        self.touched.password = true;
    }

    /// Toggle the administrator flag
    pub fn set_admin(&mut self, is_admin: bool) {
        self.focus(AddUserField::Admin);
        self.error = None;
        self.is_admin = is_admin;
    }

    // ==================== Focus ====================

    /// Move focus to `field`
    ///
    /// Leaving the name field for any other control counts as the name
    /// field losing focus.
    pub fn focus(&mut self, field: AddUserField) {
        if self.focused == Some(AddUserField::Name) && field != AddUserField::Name {
            self.name_blurred();
        }
        self.focused = Some(field);
    }

    /// Focus left the form entirely (e.g. a click on the backdrop)
    pub fn blur(&mut self) {
        if self.focused == Some(AddUserField::Name) {
            self.name_blurred();
        }
        self.focused = None;
    }

    /// Fill in a default username when the name field loses focus
    ///
    /// Only fires when the username is still empty, so a typed username is
    /// never overwritten.
    pub fn name_blurred(&mut self) {
        if !self.username.is_empty() || self.name.is_empty() {
            return;
        }
        if let Some(username) = suggest_username(&self.name) {
            self.username = username;
        }
    }

    // ==================== Submission ====================

    /// Whether the primary action is enabled
    pub fn can_submit(&self) -> bool {
        self.is_open()
            && !self.loading
            && !self.name.is_empty()
            && !self.username.is_empty()
            && !self.password.is_empty()
    }

    /// Start a submission
    ///
    /// Returns `None` (and changes nothing) when the dialog is closed, a
    /// submission is already running, or a required field is empty.
    /// Otherwise marks the dialog busy and returns the request to execute.
    pub fn begin_submit(&mut self) -> Option<NewUserRequest> {
        if !self.can_submit() {
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(NewUserRequest {
            name: self.name.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            group_id: group_id_for(self.is_admin),
        })
    }

    /// Apply the outcome of a submission
    ///
    /// On success the completion callback runs once with the created user,
    /// the dialog closes, and the callback's value is returned. On failure
    /// the dialog stays open showing the error code. Outcomes arriving when
    /// no submission is running are ignored.
    pub fn finish_submit(&mut self, result: Result<User, ApiError>) -> Option<M> {
        if !self.loading {
            return None;
        }
        self.loading = false;
        match result {
            Ok(user) => {
                let output = self
                    .params
                    .as_ref()
                    .map(|params| (params.user_added)(user));
                self.close();
                output
            }
            Err(err) => {
                self.error = Some(err.code().to_string());
                None
            }
        }
    }

    // ==================== Accessors ====================

    /// Whether the dialog is visible
    pub fn is_open(&self) -> bool {
        self.params.is_some()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Whether a submission is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Error code of the last failed submission
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Control that currently has focus, as far as the dialog knows
    pub fn focused(&self) -> Option<AddUserField> {
        self.focused
    }

    /// Whether the user has edited `field` since the dialog opened
    pub fn is_touched(&self, field: AddUserField) -> bool {
        match field {
            AddUserField::Name => self.touched.name,
            AddUserField::Username => self.touched.username,
            AddUserField::Password => self.touched.password,
            AddUserField::Admin => false,
        }
    }
}

/// Derive a username from a display name
///
/// Takes the first whitespace-separated word and lowercases it, so
/// "Jane Doe" becomes "jane". Returns `None` when the name has no words.
pub fn suggest_username(name: &str) -> Option<String> {
    name.split_whitespace().next().map(str::to_lowercase)
}
