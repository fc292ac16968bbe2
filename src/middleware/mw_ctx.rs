use crate::config::AppConfig;
use crate::database::client::Database;
use crate::utils::jwt::JWT;
use crate::utils::keyed_locks::KeyedLocks;
use chrono::Duration;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

pub struct CtxState {
    pub db: Database,
    pub jwt: JWT,
    /// Serializes dislike toggles per tuit.
    pub dislike_locks: KeyedLocks,
}

impl Debug for CtxState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CtxState")
            .field("db", &self.db)
            .finish_non_exhaustive()
    }
}

pub fn create_ctx_state(db: Database, config: &AppConfig) -> Arc<CtxState> {
    let ctx_state = CtxState {
        db,
        jwt: JWT::new(config.jwt_secret.clone(), Duration::days(7)),
        dislike_locks: KeyedLocks::new(),
    };
    Arc::new(ctx_state)
}

pub const JWT_KEY: &str = "jwt";
