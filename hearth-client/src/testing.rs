//! In-memory `UserApi` for unit tests

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use hearth_common::protocol::User;

use crate::api::{ApiError, UserApi};

/// Build a plain user record
pub fn sample_user(id: &str, name: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        is_owner: false,
        is_active: true,
        system_generated: false,
        group_ids: Vec::new(),
        credentials: Vec::new(),
    }
}

/// A recorded call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    ListUsers,
    CreateUser {
        name: String,
        group_ids: Vec<String>,
    },
    CreateAuth {
        user_id: String,
        username: String,
        password: String,
    },
    DeleteUser {
        user_id: String,
    },
}

/// Records every call and answers from configured outcomes
#[derive(Default)]
pub struct FakeUserApi {
    calls: Mutex<Vec<ApiCall>>,
    next_id: AtomicU64,
    create_user_error: Option<ApiError>,
    create_auth_error: Option<ApiError>,
    delete_user_error: Option<ApiError>,
}

impl FakeUserApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_create_user(mut self, err: ApiError) -> Self {
        self.create_user_error = Some(err);
        self
    }

    pub fn fail_create_auth(mut self, err: ApiError) -> Self {
        self.create_auth_error = Some(err);
        self
    }

    pub fn fail_delete_user(mut self, err: ApiError) -> Self {
        self.delete_user_error = Some(err);
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl UserApi for FakeUserApi {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.record(ApiCall::ListUsers);
        Ok(Vec::new())
    }

    async fn create_user(&self, name: &str, group_ids: &[String]) -> Result<User, ApiError> {
        self.record(ApiCall::CreateUser {
            name: name.to_string(),
            group_ids: group_ids.to_vec(),
        });
        if let Some(err) = &self.create_user_error {
            return Err(err.clone());
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let mut user = sample_user(&format!("user-{id}"), name);
        user.group_ids = group_ids.to_vec();
        Ok(user)
    }

    async fn create_auth_for_user(
        &self,
        user_id: &str,
        username: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        self.record(ApiCall::CreateAuth {
            user_id: user_id.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        });
        match &self.create_auth_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn delete_user(&self, user_id: &str) -> Result<(), ApiError> {
        self.record(ApiCall::DeleteUser {
            user_id: user_id.to_string(),
        });
        match &self.delete_user_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}
