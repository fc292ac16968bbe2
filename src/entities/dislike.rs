use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

/// Relation record `local_user -> dislike -> tuit`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dislike {
    pub id: Thing,
    /// user that dislikes
    pub r#in: Thing,
    /// disliked tuit
    pub out: Thing,
    pub created_at: DateTime<Utc>,
}
