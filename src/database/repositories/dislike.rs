use crate::database::client::Db;
use crate::database::table_names::{DISLIKE_TABLE_NAME, TUIT_TABLE_NAME, USER_TABLE_NAME};
use crate::entities::dislike::Dislike;
use crate::interfaces::repositories::dislike::DislikesRepositoryInterface;
use crate::middleware::error::{AppError, AppResult};
use async_trait::async_trait;
use std::sync::Arc;
use surrealdb::sql::Thing;
use surrealdb::Response;
use tracing::debug;

const DISLIKE_EXISTS: &str = "dislike_exists";
const DISLIKE_MISSING: &str = "dislike_missing";
const IN_OUT_UNIQUE_IDX: &str = "in_out_unique_idx";

#[derive(Debug)]
pub struct DislikesRepository {
    client: Arc<Db>,
}

impl DislikesRepository {
    pub fn new(client: Arc<Db>) -> Self {
        Self { client }
    }

    pub(in crate::database) async fn mutate_db(&self) -> Result<(), AppError> {
        let sql = format!("
    DEFINE TABLE IF NOT EXISTS {DISLIKE_TABLE_NAME} TYPE RELATION IN {USER_TABLE_NAME} OUT {TUIT_TABLE_NAME} ENFORCED SCHEMAFULL PERMISSIONS NONE;
    DEFINE INDEX IF NOT EXISTS {IN_OUT_UNIQUE_IDX} ON {DISLIKE_TABLE_NAME} FIELDS in, out UNIQUE;
    DEFINE INDEX IF NOT EXISTS out_idx ON {DISLIKE_TABLE_NAME} FIELDS out;
    DEFINE FIELD IF NOT EXISTS created_at ON TABLE {DISLIKE_TABLE_NAME} TYPE datetime DEFAULT time::now();
    ");
        let mutation = self.client.query(sql).await?;
        mutation.check()?;

        Ok(())
    }

    async fn get_by_field(&self, field: &str, value: &Thing) -> AppResult<Vec<Dislike>> {
        let dislikes = self
            .client
            .query(format!(
                "SELECT * FROM {DISLIKE_TABLE_NAME} WHERE {field}=$value ORDER BY created_at ASC;"
            ))
            .bind(("value", value.clone()))
            .await?
            .take::<Vec<Dislike>>(0)?;
        Ok(dislikes)
    }

    /// Runs an edge change followed by the counter write as one transaction and
    /// returns the count written to the tuit.
    async fn change_counted(
        &self,
        edge_change: &str,
        user: &Thing,
        tuit: &Thing,
    ) -> AppResult<u64> {
        let mut res = self
            .client
            .query(format!(
                "BEGIN TRANSACTION; \
                {edge_change} \
                LET $count = array::len((SELECT VALUE id FROM {DISLIKE_TABLE_NAME} WHERE out=$out)); \
                UPDATE $out SET dislikes_nr=$count; \
                COMMIT TRANSACTION; \
                RETURN $count;"
            ))
            .bind(("in", user.clone()))
            .bind(("out", tuit.clone()))
            .await?;

        into_edge_error(&mut res, user, tuit)?;

        let count = res
            .take::<Option<i64>>(res.num_statements() - 1)?
            .unwrap_or(0);
        Ok(count.max(0) as u64)
    }
}

/// Maps a failed transaction to the domain error of its first failing statement.
fn into_edge_error(res: &mut Response, user: &Thing, tuit: &Thing) -> AppResult<()> {
    let mut errors: Vec<(usize, surrealdb::Error)> = res.take_errors().into_iter().collect();
    if errors.is_empty() {
        return Ok(());
    }
    errors.sort_by_key(|(index, _)| *index);

    let ident = format!("{}->{DISLIKE_TABLE_NAME}->{}", user.to_raw(), tuit.to_raw());
    let messages: Vec<String> = errors.iter().map(|(_, err)| err.to_string()).collect();
    if messages
        .iter()
        .any(|m| m.contains(DISLIKE_EXISTS) || m.contains(IN_OUT_UNIQUE_IDX))
    {
        debug!("dislike {ident} already exists");
        return Err(AppError::EntityAlreadyExists { ident });
    }
    if messages.iter().any(|m| m.contains(DISLIKE_MISSING)) {
        return Err(AppError::EntityFailIdNotFound { ident });
    }

    let (_, first) = errors.remove(0);
    Err(first.into())
}

#[async_trait]
impl DislikesRepositoryInterface for DislikesRepository {
    async fn get(&self, user: &Thing, tuit: &Thing) -> AppResult<Option<Dislike>> {
        let dislike = self
            .client
            .query(format!(
                "SELECT * FROM {DISLIKE_TABLE_NAME} WHERE in=$in AND out=$out LIMIT 1;"
            ))
            .bind(("in", user.clone()))
            .bind(("out", tuit.clone()))
            .await?
            .take::<Option<Dislike>>(0)?;
        Ok(dislike)
    }

    async fn count_by_tuit(&self, tuit: &Thing) -> AppResult<u64> {
        let count = self
            .client
            .query(format!(
                "RETURN array::len((SELECT VALUE id FROM {DISLIKE_TABLE_NAME} WHERE out=$out));"
            ))
            .bind(("out", tuit.clone()))
            .await?
            .take::<Option<i64>>(0)?
            .unwrap_or(0);
        Ok(count.max(0) as u64)
    }

    async fn create(&self, user: &Thing, tuit: &Thing) -> AppResult<u64> {
        let edge_change = format!(
            "IF array::len((SELECT VALUE id FROM {DISLIKE_TABLE_NAME} WHERE in=$in AND out=$out)) > 0 {{ THROW \"{DISLIKE_EXISTS}\" }}; \
            RELATE $in->{DISLIKE_TABLE_NAME}->$out;"
        );
        self.change_counted(&edge_change, user, tuit).await
    }

    async fn delete(&self, user: &Thing, tuit: &Thing) -> AppResult<u64> {
        let edge_change = format!(
            "IF array::len((SELECT VALUE id FROM {DISLIKE_TABLE_NAME} WHERE in=$in AND out=$out)) = 0 {{ THROW \"{DISLIKE_MISSING}\" }}; \
            DELETE {DISLIKE_TABLE_NAME} WHERE in=$in AND out=$out;"
        );
        self.change_counted(&edge_change, user, tuit).await
    }

    async fn get_by_tuit(&self, tuit: &Thing) -> AppResult<Vec<Dislike>> {
        self.get_by_field("out", tuit).await
    }

    async fn get_by_user(&self, user: &Thing) -> AppResult<Vec<Dislike>> {
        self.get_by_field("in", user).await
    }
}
