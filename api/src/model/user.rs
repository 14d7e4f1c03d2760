use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::UserId,
    role::Role,
    user::event::AdminUpdateUser,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleName {
    Admin,
    User,
    Colab,
}

impl From<Role> for RoleName {
    fn from(value: Role) -> Self {
        match value {
            Role::Admin => Self::Admin,
            Role::User => Self::User,
            Role::Colab => Self::Colab,
        }
    }
}

impl From<RoleName> for Role {
    fn from(value: RoleName) -> Self {
        match value {
            RoleName::Admin => Self::Admin,
            RoleName::User => Self::User,
            RoleName::Colab => Self::Colab,
        }
    }
}

/// The restricted admin edit: display name and role, nothing else.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AdminEditUserRequest {
    #[garde(inner(length(min = 1)))]
    pub name: Option<String>,
    #[garde(skip)]
    pub role: Option<RoleName>,
}

#[derive(new)]
pub struct AdminEditUserRequestWithUserId(UserId, AdminEditUserRequest);

impl From<AdminEditUserRequestWithUserId> for AdminUpdateUser {
    fn from(value: AdminEditUserRequestWithUserId) -> Self {
        let AdminEditUserRequestWithUserId(user_id, AdminEditUserRequest { name, role }) = value;
        Self {
            user_id,
            name,
            role: role.map(Role::from),
        }
    }
}
