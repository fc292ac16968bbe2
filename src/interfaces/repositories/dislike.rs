use crate::entities::dislike::Dislike;
use crate::middleware::error::AppResult;
use async_trait::async_trait;
use surrealdb::sql::Thing;

#[async_trait]
pub trait DislikesRepositoryInterface {
    async fn get(&self, user: &Thing, tuit: &Thing) -> AppResult<Option<Dislike>>;
    /// Live number of edges pointing at `tuit`.
    async fn count_by_tuit(&self, tuit: &Thing) -> AppResult<u64>;
    /// Relates the pair and writes the resulting live count to the tuit's `dislikes_nr`
    /// atomically. Returns the written count.
    /// Fails with `EntityAlreadyExists` when the pair is already related.
    async fn create(&self, user: &Thing, tuit: &Thing) -> AppResult<u64>;
    /// Counterpart of `create`.
    /// Fails with `EntityFailIdNotFound` when the pair is not related.
    async fn delete(&self, user: &Thing, tuit: &Thing) -> AppResult<u64>;
    async fn get_by_tuit(&self, tuit: &Thing) -> AppResult<Vec<Dislike>>;
    async fn get_by_user(&self, user: &Thing) -> AppResult<Vec<Dislike>>;
}
