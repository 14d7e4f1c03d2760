use crate::{
    model::auth::{LoginRequest, RegisterRequest},
    session::SessionContext,
};
use derive_new::new;
use garde::Validate;
use kernel::model::{id::EventId, user::User};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};
use std::sync::Arc;

/// Login, registration, logout and profile updates. Every path that
/// succeeds ends with the session slot and the in-memory context holding
/// the same record.
#[derive(new)]
pub struct AuthWorkflow {
    users: Arc<dyn UserRepository>,
    session: Arc<SessionContext>,
}

impl AuthWorkflow {
    /// Credential match is exact and case-sensitive, done store-side via
    /// query parameters. A miss is indistinguishable from a wrong password.
    pub async fn login(&self, req: LoginRequest) -> AppResult<User> {
        req.validate(&())?;

        let user = self
            .users
            .find_by_credentials(&req.email, &req.password)
            .await?
            .ok_or(AppError::UnauthenticatedError)?;

        self.session.persist(user.clone()).await?;
        tracing::info!(email = %user.email, role = %user.role, "login succeeded");
        Ok(user)
    }

    /// Fails on an already-registered email without inserting anything.
    /// The stored role is always `user`, whatever the form asked for.
    pub async fn register(&self, req: RegisterRequest) -> AppResult<User> {
        req.validate(&())?;

        if self.users.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::UnprocessableEntity(
                "the email address is already registered".into(),
            ));
        }

        let created = self.users.create(req.into()).await?;
        self.session.persist(created.clone()).await?;
        tracing::info!(email = %created.email, "account registered");
        Ok(created)
    }

    pub async fn logout(&self) -> AppResult<()> {
        self.session.clear().await
    }

    /// Full-record profile update, then mirror into the session. No
    /// per-field permission check here; admins change name/role through
    /// their own restricted path instead.
    pub async fn update_user(&self, user: User) -> AppResult<User> {
        if user.id.is_empty() {
            return Err(AppError::UnprocessableEntity(
                "cannot update a user without an identifier".into(),
            ));
        }
        let updated = self.users.update(&user).await?;
        self.session.persist(updated.clone()).await?;
        Ok(updated)
    }

    /// Bookmarks or un-bookmarks an event for the session user. Goes
    /// through the same full-record update as any profile change.
    pub async fn toggle_saved_event(&self, event_id: EventId) -> AppResult<User> {
        let mut user = self
            .session
            .current_user()
            .ok_or(AppError::UnauthenticatedError)?;
        user.toggle_saved(event_id);
        self.update_user(user).await
    }
}
