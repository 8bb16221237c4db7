//! Users panel state

use hearth_common::protocol::User;

/// State of the users list
///
/// `users` is `None` until the first list arrives (loading state).
#[derive(Debug, Clone, Default)]
pub struct UsersPanelState {
    pub users: Option<Result<Vec<User>, String>>,
}

impl UsersPanelState {
    /// Forget the list (shows the loading state)
    pub fn clear(&mut self) {
        self.users = None;
    }

    /// Store a freshly loaded list
    pub fn set_users(&mut self, mut users: Vec<User>) {
        sort_by_name(&mut users);
        self.users = Some(Ok(users));
    }

    /// Store a load failure
    pub fn set_error(&mut self, error: String) {
        self.users = Some(Err(error));
    }

    /// Add a newly created user, keeping the list sorted
    ///
    /// Ignored while the list is not loaded; the next load will include it.
    pub fn insert(&mut self, user: User) {
        if let Some(Ok(users)) = &mut self.users {
            users.retain(|existing| existing.id != user.id);
            users.push(user);
            sort_by_name(users);
        }
    }

    /// Users shown in the panel (integration accounts are hidden)
    pub fn visible_users(&self) -> Vec<&User> {
        match &self.users {
            Some(Ok(users)) => users.iter().filter(|u| !u.system_generated).collect(),
            _ => Vec::new(),
        }
    }

    /// Whether the list has been loaded successfully
    pub fn is_loaded(&self) -> bool {
        matches!(self.users, Some(Ok(_)))
    }
}

fn sort_by_name(users: &mut [User]) {
    users.sort_by_cached_key(|user| user.name.to_lowercase());
}
