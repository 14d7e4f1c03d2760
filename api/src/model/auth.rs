use chrono::Utc;
use garde::Validate;
use kernel::model::user::event::CreateUser;
use serde::Deserialize;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub password: String,
    #[garde(skip)]
    pub name: Option<String>,
    #[garde(skip)]
    pub last_name: Option<String>,
    #[garde(skip)]
    pub second_last_name: Option<String>,
    #[garde(skip)]
    pub phone: Option<String>,
    #[garde(skip)]
    pub username: Option<String>,
    #[garde(skip)]
    pub photo: Option<String>,
    /// Accepted from the form but never honored; every registration yields
    /// a plain user.
    #[serde(default)]
    #[garde(skip)]
    pub role: Option<String>,
}

impl From<RegisterRequest> for CreateUser {
    fn from(value: RegisterRequest) -> Self {
        let RegisterRequest {
            email,
            password,
            name,
            last_name,
            second_last_name,
            phone,
            username,
            photo,
            role: _,
        } = value;
        Self {
            email,
            password,
            name,
            last_name,
            second_last_name,
            phone,
            username,
            photo,
            created_at: Utc::now(),
        }
    }
}
