use crate::rest::{model::user::UserRow, RestClient};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::user::{
    event::{AdminUpdateUser, CreateUser, DeleteUser},
    User,
};
use kernel::repository::user::UserRepository;
use serde_json::{Map, Value};
use shared::error::AppResult;

#[derive(new)]
pub struct UserRepositoryImpl {
    client: RestClient,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let rows: Vec<UserRow> = self.client.list("/users", &[]).await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_credentials(&self, email: &str, password: &str) -> AppResult<Option<User>> {
        let rows: Vec<UserRow> = self
            .client
            .list("/users", &[("email", email), ("password", password)])
            .await?;
        Ok(rows.into_iter().next().map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let rows: Vec<UserRow> = self.client.list("/users", &[("email", email)]).await?;
        Ok(rows.into_iter().next().map(User::from))
    }

    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let created: UserRow = self
            .client
            .post("/users", &UserRow::from_create(&event))
            .await?;
        Ok(created.into())
    }

    async fn update(&self, user: &User) -> AppResult<User> {
        let updated: UserRow = self
            .client
            .put(&format!("/users/{}", user.id), &UserRow::from(user))
            .await?;
        Ok(updated.into())
    }

    async fn admin_update(&self, event: AdminUpdateUser) -> AppResult<User> {
        let mut patch = Map::new();
        if let Some(name) = event.name {
            patch.insert("name".into(), Value::String(name));
        }
        if let Some(role) = event.role {
            patch.insert("role".into(), Value::String(role.to_string()));
        }
        let updated: UserRow = self
            .client
            .patch(&format!("/users/{}", event.user_id), &Value::Object(patch))
            .await?;
        Ok(updated.into())
    }

    async fn delete(&self, event: DeleteUser) -> AppResult<()> {
        self.client
            .delete(&format!("/users/{}", event.user_id))
            .await
    }
}
