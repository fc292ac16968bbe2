use crate::entities::user::LocalUser;
use crate::middleware::error::AppResult;
use async_trait::async_trait;
use surrealdb::sql::Thing;

#[async_trait]
pub trait UsersRepositoryInterface {
    async fn get_by_id(&self, user: &Thing) -> AppResult<LocalUser>;
    /// Skips ids that do not resolve, keeps the order of `users` otherwise.
    async fn get_by_ids(&self, users: Vec<Thing>) -> AppResult<Vec<LocalUser>>;
}
