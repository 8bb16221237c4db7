//! Two-step user provisioning
//!
//! A login-capable user needs two remote records: the user itself and a
//! username/password credential attached to it. The credential is only
//! created after the user exists; if it cannot be created the user is
//! deleted again so no half-provisioned account is left behind.

use hearth_common::protocol::User;

use super::add_user::NewUserRequest;
use crate::api::{ApiError, UserApi};

/// Create a user and its credentials, rolling back on partial failure
///
/// Returns the created user when both steps succeed. A failed user creation
/// is returned as is. A failed credential creation triggers a deletion of
/// the new user (awaited, outcome only logged) and then returns the
/// credential error.
pub async fn create_user_with_credentials<A>(
    api: &A,
    request: &NewUserRequest,
) -> Result<User, ApiError>
where
    A: UserApi + ?Sized,
{
    let group_ids = [request.group_id.to_string()];
    let user = api.create_user(&request.name, &group_ids).await?;
    tracing::debug!(user_id = %user.id, group = request.group_id, "user record created");

    if let Err(err) = api
        .create_auth_for_user(&user.id, &request.username, &request.password)
        .await
    {
        tracing::info!(
            user_id = %user.id,
            code = err.code(),
            "credential creation failed, removing user"
        );
        if let Err(rollback) = api.delete_user(&user.id).await {
            tracing::warn!(
                user_id = %user.id,
                code = rollback.code(),
                "failed to remove partially created user"
            );
        }
        return Err(err);
    }

    tracing::info!(user_id = %user.id, username = %request.username, "user added");
    Ok(user)
}
