use crate::database::client::Db;
use crate::database::table_names::USER_TABLE_NAME;
use crate::entities::user::LocalUser;
use crate::interfaces::repositories::user::UsersRepositoryInterface;
use crate::middleware::error::{AppError, AppResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use surrealdb::sql::Thing;

#[derive(Debug)]
pub struct UsersRepository {
    client: Arc<Db>,
}

impl UsersRepository {
    pub fn new(client: Arc<Db>) -> Self {
        Self { client }
    }

    pub(in crate::database) async fn mutate_db(&self) -> Result<(), AppError> {
        let sql = format!("
    DEFINE TABLE IF NOT EXISTS {USER_TABLE_NAME} SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS username ON TABLE {USER_TABLE_NAME} TYPE string ASSERT string::len(string::trim($value))>0;
    DEFINE INDEX IF NOT EXISTS username_idx ON TABLE {USER_TABLE_NAME} COLUMNS username UNIQUE;
    DEFINE FIELD IF NOT EXISTS full_name ON TABLE {USER_TABLE_NAME} TYPE option<string>;
    ");
        let mutation = self.client.query(sql).await?;
        mutation.check()?;

        Ok(())
    }

    pub async fn create(&self, username: &str, full_name: Option<String>) -> AppResult<LocalUser> {
        let user = self
            .client
            .query(format!(
                "CREATE {USER_TABLE_NAME} CONTENT {{ username: $username, full_name: $full_name }};"
            ))
            .bind(("username", username.to_string()))
            .bind(("full_name", full_name))
            .await?
            .take::<Option<LocalUser>>(0)?;

        user.ok_or(AppError::Generic {
            description: "user not created".to_string(),
        })
    }
}

#[async_trait]
impl UsersRepositoryInterface for UsersRepository {
    async fn get_by_id(&self, user: &Thing) -> AppResult<LocalUser> {
        let data = self
            .client
            .query("SELECT * FROM $user;")
            .bind(("user", user.clone()))
            .await?
            .take::<Option<LocalUser>>(0)?;

        data.ok_or(AppError::EntityFailIdNotFound {
            ident: user.to_raw(),
        })
    }

    async fn get_by_ids(&self, users: Vec<Thing>) -> AppResult<Vec<LocalUser>> {
        if users.is_empty() {
            return Ok(vec![]);
        }

        let found = self
            .client
            .query(format!("SELECT * FROM {USER_TABLE_NAME} WHERE id IN $users;"))
            .bind(("users", users.clone()))
            .await?
            .take::<Vec<LocalUser>>(0)?;

        let mut by_id: HashMap<String, LocalUser> = found
            .into_iter()
            .map(|user| (user.id.to_raw(), user))
            .collect();

        Ok(users
            .iter()
            .filter_map(|id| by_id.remove(&id.to_raw()))
            .collect())
    }
}
