use kernel::model::{role::Role, user::User};
use kernel::repository::session::SessionStore;
use shared::error::AppResult;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// The process-wide view of "who is logged in". Initialized once from the
/// persisted slot; afterwards the slot and this cache move together, and
/// only the auth workflow mutates them. Everything else is a pure read,
/// no network involved.
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
    current: RwLock<Option<User>>,
}

impl SessionContext {
    pub async fn init(store: Arc<dyn SessionStore>) -> AppResult<Self> {
        let current = store.load().await?;
        Ok(Self {
            store,
            current: RwLock::new(current),
        })
    }

    pub fn current_user(&self) -> Option<User> {
        self.read().clone()
    }

    pub fn role(&self) -> Option<Role> {
        self.read().as_ref().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    pub fn is_user(&self) -> bool {
        self.role() == Some(Role::User)
    }

    pub fn is_collaborator(&self) -> bool {
        self.role() == Some(Role::Colab)
    }

    pub(crate) async fn persist(&self, user: User) -> AppResult<()> {
        self.store.store(&user).await?;
        *self.write() = Some(user);
        Ok(())
    }

    pub(crate) async fn clear(&self) -> AppResult<()> {
        self.store.clear().await?;
        *self.write() = None;
        Ok(())
    }

    fn read(&self) -> RwLockReadGuard<'_, Option<User>> {
        self.current.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<User>> {
        self.current.write().unwrap_or_else(|e| e.into_inner())
    }
}
