use crate::model::{id::UserId, role::Role};
use chrono::{DateTime, Utc};
use derive_new::new;

/// Payload for inserting a new account. There is deliberately no `role`
/// field a caller could smuggle in; registration always produces a plain
/// user and only the admin edit path can change the role afterwards.
pub struct CreateUser {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub second_last_name: Option<String>,
    pub phone: Option<String>,
    pub username: Option<String>,
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Restricted admin edit: display name and role only. Profile fields stay
/// owned by the account holder.
#[derive(Debug, new)]
pub struct AdminUpdateUser {
    pub user_id: UserId,
    pub name: Option<String>,
    pub role: Option<Role>,
}

#[derive(Debug, new)]
pub struct DeleteUser {
    pub user_id: UserId,
}
