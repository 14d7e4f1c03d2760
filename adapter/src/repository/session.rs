use crate::rest::model::user::UserRow;
use async_trait::async_trait;
use derive_new::new;
use kernel::{model::user::User, repository::session::SessionStore};
use shared::error::{AppError, AppResult};
use std::{io::ErrorKind, path::PathBuf};
use tokio::fs;

/// Session slot backed by a single JSON file, the stand-in for the
/// browser-local storage slot the presentation layer would use.
#[derive(new)]
pub struct FileSessionStore {
    path: PathBuf,
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> AppResult<Option<User>> {
        let raw = match fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(AppError::SessionSlotError(e)),
        };
        // A corrupt slot means logged out, not a crash; the next login
        // overwrites it.
        match serde_json::from_slice::<UserRow>(&raw) {
            Ok(row) => Ok(Some(row.into())),
            Err(e) => {
                tracing::warn!(error = %e, "session slot held unreadable data, treating as logged out");
                Ok(None)
            }
        }
    }

    async fn store(&self, user: &User) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let raw = serde_json::to_vec_pretty(&UserRow::from(user))?;
        fs::write(&self.path, raw).await?;
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::SessionSlotError(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::{id::UserId, role::Role};

    fn sample_user() -> User {
        User {
            id: UserId::from("5"),
            email: "ana@example.com".into(),
            password: "pw".into(),
            name: Some("Ana".into()),
            last_name: None,
            second_last_name: None,
            phone: None,
            username: None,
            photo: None,
            role: Role::Colab,
            saved_events: Vec::new(),
            created_at: None,
        }
    }

    #[tokio::test]
    async fn slot_round_trips_and_clears() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let store = FileSessionStore::new(dir.path().join("auth_user.json"));

        assert!(store.load().await?.is_none());

        let user = sample_user();
        store.store(&user).await?;
        assert_eq!(store.load().await?, Some(user));

        store.clear().await?;
        assert!(store.load().await?.is_none());
        // Clearing an already-empty slot is fine.
        store.clear().await?;
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_slot_reads_as_logged_out() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("auth_user.json");
        tokio::fs::write(&path, b"{not json").await?;

        let store = FileSessionStore::new(path);
        assert!(store.load().await?.is_none());
        Ok(())
    }
}
