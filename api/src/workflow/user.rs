use crate::{
    model::user::{AdminEditUserRequest, AdminEditUserRequestWithUserId},
    session::SessionContext,
};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::UserId,
    user::{event::DeleteUser, User},
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};
use std::sync::Arc;

/// User administration, admin-only. Edits go through the restricted
/// name/role patch, never the full profile update.
#[derive(new)]
pub struct UserAdminWorkflow {
    users: Arc<dyn UserRepository>,
    session: Arc<SessionContext>,
}

impl UserAdminWorkflow {
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.require_admin()?;
        self.users.find_all().await
    }

    pub async fn edit_user(&self, user_id: UserId, req: AdminEditUserRequest) -> AppResult<User> {
        self.require_admin()?;
        req.validate(&())?;
        self.users
            .admin_update(AdminEditUserRequestWithUserId::new(user_id, req).into())
            .await
    }

    /// Deletes the account and returns the re-fetched listing.
    pub async fn delete_user(&self, user_id: UserId) -> AppResult<Vec<User>> {
        self.require_admin()?;
        self.users.delete(DeleteUser::new(user_id)).await?;
        self.users.find_all().await
    }

    fn require_admin(&self) -> AppResult<()> {
        if self.session.is_admin() {
            Ok(())
        } else {
            Err(AppError::UnauthorizedError)
        }
    }
}
