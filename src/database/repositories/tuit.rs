use crate::database::client::Db;
use crate::database::table_names::{TUIT_TABLE_NAME, USER_TABLE_NAME};
use crate::entities::tuit::{Tuit, TuitView};
use crate::interfaces::repositories::tuit::TuitsRepositoryInterface;
use crate::middleware::error::{AppError, AppResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use surrealdb::sql::Thing;

#[derive(Debug)]
pub struct TuitsRepository {
    client: Arc<Db>,
}

impl TuitsRepository {
    pub fn new(client: Arc<Db>) -> Self {
        Self { client }
    }

    pub(in crate::database) async fn mutate_db(&self) -> Result<(), AppError> {
        let sql = format!("
    DEFINE TABLE IF NOT EXISTS {TUIT_TABLE_NAME} SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS tuit ON TABLE {TUIT_TABLE_NAME} TYPE string ASSERT string::len(string::trim($value))>0;
    DEFINE FIELD IF NOT EXISTS posted_by ON TABLE {TUIT_TABLE_NAME} TYPE record<{USER_TABLE_NAME}>;
    DEFINE INDEX IF NOT EXISTS posted_by_idx ON TABLE {TUIT_TABLE_NAME} COLUMNS posted_by;
    DEFINE FIELD IF NOT EXISTS posted_on ON TABLE {TUIT_TABLE_NAME} TYPE datetime DEFAULT time::now();
    DEFINE FIELD IF NOT EXISTS dislikes_nr ON TABLE {TUIT_TABLE_NAME} TYPE int DEFAULT 0;
    ");
        let mutation = self.client.query(sql).await?;
        mutation.check()?;

        Ok(())
    }

    pub async fn create(&self, user: &Thing, content: &str) -> AppResult<Tuit> {
        let tuit = self
            .client
            .query(format!(
                "CREATE {TUIT_TABLE_NAME} CONTENT {{ tuit: $tuit, posted_by: $user }};"
            ))
            .bind(("tuit", content.to_string()))
            .bind(("user", user.clone()))
            .await?
            .take::<Option<Tuit>>(0)?;

        tuit.ok_or(AppError::Generic {
            description: "tuit not created".to_string(),
        })
    }

    pub async fn delete(&self, tuit: &Thing) -> AppResult<()> {
        self.client
            .query("DELETE $tuit;")
            .bind(("tuit", tuit.clone()))
            .await?
            .check()?;
        Ok(())
    }

    /// Overwrites the cached counter. Toggles keep it in sync on their own.
    pub async fn update_dislikes_nr(&self, tuit: &Thing, count: u64) -> AppResult<()> {
        let updated = self
            .client
            .query("UPDATE $tuit SET dislikes_nr=$count RETURN AFTER;")
            .bind(("tuit", tuit.clone()))
            .bind(("count", count as i64))
            .await?
            .take::<Option<Tuit>>(0)?;

        match updated {
            Some(_) => Ok(()),
            None => Err(AppError::EntityFailIdNotFound {
                ident: tuit.to_raw(),
            }),
        }
    }
}

#[async_trait]
impl TuitsRepositoryInterface for TuitsRepository {
    async fn get_by_id(&self, tuit: &Thing) -> AppResult<Tuit> {
        let data = self
            .client
            .query("SELECT * FROM $tuit;")
            .bind(("tuit", tuit.clone()))
            .await?
            .take::<Option<Tuit>>(0)?;

        data.ok_or(AppError::EntityFailIdNotFound {
            ident: tuit.to_raw(),
        })
    }

    async fn get_views_by_ids(&self, tuits: Vec<Thing>) -> AppResult<Vec<TuitView>> {
        if tuits.is_empty() {
            return Ok(vec![]);
        }

        let views = self
            .client
            .query(format!(
                "SELECT id, tuit, posted_by.* AS posted_by, posted_on, dislikes_nr FROM {TUIT_TABLE_NAME} WHERE id IN $tuits;"
            ))
            .bind(("tuits", tuits.clone()))
            .await?
            .take::<Vec<TuitView>>(0)?;

        let mut by_id: HashMap<String, TuitView> = views
            .into_iter()
            .map(|view| (view.id.to_raw(), view))
            .collect();

        Ok(tuits
            .iter()
            .filter_map(|id| by_id.remove(&id.to_raw()))
            .collect())
    }
}
