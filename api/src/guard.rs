//! Route guard predicates. The presentation router calls these before
//! rendering a protected view and redirects to the public entry view when
//! one returns false; a failed guard is never an error.

use crate::session::SessionContext;

pub fn authenticated(session: &SessionContext) -> bool {
    session.is_authenticated()
}

pub fn admin(session: &SessionContext) -> bool {
    session.is_admin()
}

pub fn user(session: &SessionContext) -> bool {
    session.is_user()
}

pub fn collaborator(session: &SessionContext) -> bool {
    session.is_collaborator()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::support::{ctx, ctx_with_user, sample_user, InMemorySessionStore};
    use kernel::model::role::Role;
    use shared::error::AppResult;

    #[tokio::test]
    async fn logged_out_sessions_fail_every_guard() -> AppResult<()> {
        let session = ctx(InMemorySessionStore::empty()).await?;
        assert!(!authenticated(&session));
        assert!(!admin(&session));
        assert!(!user(&session));
        assert!(!collaborator(&session));
        Ok(())
    }

    #[tokio::test]
    async fn each_role_passes_exactly_its_own_guard() -> AppResult<()> {
        let session = ctx_with_user(sample_user("1", "colab@example.com", Role::Colab)).await?;
        assert!(authenticated(&session));
        assert!(collaborator(&session));
        assert!(!admin(&session));
        assert!(!user(&session));

        let session = ctx_with_user(sample_user("2", "root@example.com", Role::Admin)).await?;
        assert!(admin(&session));
        assert!(!collaborator(&session));
        Ok(())
    }
}
