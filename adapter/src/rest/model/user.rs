use super::{de_flexible_date, de_opaque_id, de_opaque_id_list};
use chrono::{DateTime, Utc};
use kernel::model::{
    id::{EventId, UserId},
    role::Role,
    user::{event::CreateUser, User},
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Wire form of a user row. All the looseness of the stored JSON is
/// absorbed here, once, so the domain model never sees missing roles or
/// numeric ids.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRow {
    #[serde(
        default,
        deserialize_with = "de_opaque_id",
        skip_serializing_if = "String::is_empty"
    )]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default, deserialize_with = "de_opaque_id_list")]
    pub saved_events: Vec<String>,
    #[serde(
        default,
        deserialize_with = "de_flexible_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_role() -> String {
    "user".into()
}

impl UserRow {
    /// Insert body for registration. The role is written as plain `user`
    /// here no matter what reached the workflow; `CreateUser` cannot carry
    /// one.
    pub fn from_create(event: &CreateUser) -> Self {
        Self {
            id: String::new(),
            email: event.email.clone(),
            password: event.password.clone(),
            name: event.name.clone(),
            last_name: event.last_name.clone(),
            second_last_name: event.second_last_name.clone(),
            phone: event.phone.clone(),
            username: event.username.clone(),
            photo: event.photo.clone(),
            role: Role::User.to_string(),
            saved_events: Vec::new(),
            created_at: Some(event.created_at),
        }
    }
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        let UserRow {
            id,
            email,
            password,
            name,
            last_name,
            second_last_name,
            phone,
            username,
            photo,
            role,
            saved_events,
            created_at,
        } = row;
        Self {
            id: UserId::new(id),
            email,
            password,
            name,
            last_name,
            second_last_name,
            phone,
            username,
            photo,
            // Unknown role strings fall back to the least-privileged role.
            role: Role::from_str(&role).unwrap_or_default(),
            saved_events: saved_events.into_iter().map(EventId::new).collect(),
            created_at,
        }
    }
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.raw().to_string(),
            email: user.email.clone(),
            password: user.password.clone(),
            name: user.name.clone(),
            last_name: user.last_name.clone(),
            second_last_name: user.second_last_name.clone(),
            phone: user.phone.clone(),
            username: user.username.clone(),
            photo: user.photo.clone(),
            role: user.role.to_string(),
            saved_events: user
                .saved_events
                .iter()
                .map(|id| id.raw().to_string())
                .collect(),
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loose_rows_normalize_to_a_plain_user() {
        let row: UserRow = serde_json::from_str(
            r#"{"id": 7, "email": "ana@example.com", "password": "pw",
                "savedEvents": [3, "9"], "role": "moderator"}"#,
        )
        .unwrap();
        let user = User::from(row);

        assert_eq!(user.id, UserId::from("7"));
        assert_eq!(user.role, Role::User);
        assert_eq!(
            user.saved_events,
            vec![EventId::from("3"), EventId::from("9")]
        );
        assert!(user.name.is_none());
    }

    #[test]
    fn insert_body_never_carries_an_id_and_always_role_user() {
        let event = CreateUser {
            email: "ana@example.com".into(),
            password: "pw".into(),
            name: Some("Ana".into()),
            last_name: None,
            second_last_name: None,
            phone: None,
            username: None,
            photo: None,
            created_at: Utc::now(),
        };
        let body = serde_json::to_value(UserRow::from_create(&event)).unwrap();

        assert!(body.get("id").is_none());
        assert_eq!(body["role"], "user");
        assert_eq!(body["savedEvents"], serde_json::json!([]));
    }
}
