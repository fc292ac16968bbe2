use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use super::user::LocalUser;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tuit {
    pub id: Thing,
    pub tuit: String,
    pub posted_by: Thing,
    pub posted_on: DateTime<Utc>,
    /// Cached number of `dislike` edges pointing at this tuit.
    pub dislikes_nr: i64,
}

/// Tuit with its poster fetched. `posted_by` is `None` when the user record is gone.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TuitView {
    pub id: Thing,
    pub tuit: String,
    pub posted_by: Option<LocalUser>,
    pub posted_on: DateTime<Utc>,
    pub dislikes_nr: i64,
}
