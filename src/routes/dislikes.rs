use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::database::repositories::{
    dislike::DislikesRepository, tuit::TuitsRepository, user::UsersRepository,
};
use crate::database::table_names::TUIT_TABLE_NAME;
use crate::entities::dislike::Dislike;
use crate::entities::tuit::TuitView;
use crate::entities::user::LocalUser;
use crate::middleware::ctx::Ctx;
use crate::middleware::error::CtxResult;
use crate::middleware::identity::ActorRef;
use crate::middleware::mw_ctx::CtxState;
use crate::middleware::utils::string_utils::get_table_thing;
use crate::services::dislike_service::DislikeService;

pub fn routes() -> Router<Arc<CtxState>> {
    Router::new()
        .route("/api/tuits/:tuit_id/dislikes", get(get_tuit_dislikers))
        .route("/api/users/:user_id/dislikes", get(get_user_disliked_tuits))
        .route(
            "/api/users/:user_id/dislikes/:tuit_id",
            get(get_dislike_status).put(toggle_dislike),
        )
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DislikeToggleResponse {
    pub disliked: bool,
    pub dislikes_count: u64,
}

fn dislike_service<'a>(
    ctx: &'a Ctx,
    state: &'a CtxState,
) -> DislikeService<'a, DislikesRepository, TuitsRepository, UsersRepository> {
    DislikeService::new(
        ctx,
        &state.db.dislikes,
        &state.db.tuits,
        &state.db.users,
        &state.dislike_locks,
    )
}

async fn get_tuit_dislikers(
    ctx: Ctx,
    State(state): State<Arc<CtxState>>,
    Path(tuit_id): Path<String>,
) -> CtxResult<Json<Vec<LocalUser>>> {
    let tuit = get_table_thing(TUIT_TABLE_NAME, &tuit_id).map_err(|e| ctx.to_ctx_error(e))?;
    let users = dislike_service(&ctx, &state).dislikers_of(&tuit).await?;
    Ok(Json(users))
}

async fn get_user_disliked_tuits(
    ctx: Ctx,
    State(state): State<Arc<CtxState>>,
    Path(user_id): Path<String>,
) -> CtxResult<Json<Vec<TuitView>>> {
    let user = ActorRef::parse(&user_id).resolve(&ctx)?;
    let tuits = dislike_service(&ctx, &state)
        .disliked_tuits_of(&user)
        .await?;
    Ok(Json(tuits))
}

async fn toggle_dislike(
    ctx: Ctx,
    State(state): State<Arc<CtxState>>,
    Path((user_id, tuit_id)): Path<(String, String)>,
) -> CtxResult<Json<DislikeToggleResponse>> {
    let user = ActorRef::parse(&user_id).resolve(&ctx)?;
    let tuit = get_table_thing(TUIT_TABLE_NAME, &tuit_id).map_err(|e| ctx.to_ctx_error(e))?;

    let toggled = dislike_service(&ctx, &state).toggle(&user, &tuit).await?;

    Ok(Json(DislikeToggleResponse {
        disliked: toggled.disliked,
        dislikes_count: toggled.dislikes_nr,
    }))
}

async fn get_dislike_status(
    ctx: Ctx,
    State(state): State<Arc<CtxState>>,
    Path((user_id, tuit_id)): Path<(String, String)>,
) -> CtxResult<Json<Option<Dislike>>> {
    let user = ActorRef::parse(&user_id).resolve(&ctx)?;
    let tuit = get_table_thing(TUIT_TABLE_NAME, &tuit_id).map_err(|e| ctx.to_ctx_error(e))?;

    let dislike = dislike_service(&ctx, &state)
        .find_dislike(&user, &tuit)
        .await?;
    Ok(Json(dislike))
}
