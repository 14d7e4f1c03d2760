use crate::model::user::{
    event::{AdminUpdateUser, CreateUser, DeleteUser},
    User,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<User>>;
    // Login lookup; the match is exact and done store-side via query params.
    async fn find_by_credentials(&self, email: &str, password: &str) -> AppResult<Option<User>>;
    // Registration uniqueness check.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
    async fn create(&self, event: CreateUser) -> AppResult<User>;
    // Full-record replacement; the caller is responsible for sending a
    // merged record, not a partial one.
    async fn update(&self, user: &User) -> AppResult<User>;
    // Restricted admin patch of name/role.
    async fn admin_update(&self, event: AdminUpdateUser) -> AppResult<User>;
    async fn delete(&self, event: DeleteUser) -> AppResult<()>;
}
