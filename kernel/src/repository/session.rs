use crate::model::user::User;
use async_trait::async_trait;
use shared::error::AppResult;

/// The persistent slot holding the logged-in user. Absence means logged
/// out. Readers never write through this trait directly; mutation is owned
/// by the auth workflow.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self) -> AppResult<Option<User>>;
    async fn store(&self, user: &User) -> AppResult<()>;
    async fn clear(&self) -> AppResult<()>;
}
