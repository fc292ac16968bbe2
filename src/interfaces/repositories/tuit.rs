use crate::entities::tuit::{Tuit, TuitView};
use crate::middleware::error::AppResult;
use async_trait::async_trait;
use surrealdb::sql::Thing;

#[async_trait]
pub trait TuitsRepositoryInterface {
    async fn get_by_id(&self, tuit: &Thing) -> AppResult<Tuit>;
    /// Skips ids that do not resolve, keeps the order of `tuits` otherwise.
    async fn get_views_by_ids(&self, tuits: Vec<Thing>) -> AppResult<Vec<TuitView>>;
}
