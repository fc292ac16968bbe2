use surrealdb::sql::Thing;
use tracing::{debug, info};

use crate::{
    entities::{dislike::Dislike, tuit::TuitView, user::LocalUser},
    interfaces::repositories::{
        dislike::DislikesRepositoryInterface, tuit::TuitsRepositoryInterface,
        user::UsersRepositoryInterface,
    },
    middleware::{ctx::Ctx, error::CtxResult},
    utils::keyed_locks::KeyedLocks,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DislikeState {
    NotDisliked,
    Disliked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DislikeTransition {
    pub next: DislikeState,
    pub dislikes_nr: u64,
}

/// Decides the next state from edge presence and the live edge count.
/// The count is recomputed here instead of trusting the cached one on the tuit.
pub fn plan_toggle(existing: bool, authoritative_count: u64) -> DislikeTransition {
    if existing {
        DislikeTransition {
            next: DislikeState::NotDisliked,
            dislikes_nr: authoritative_count.saturating_sub(1),
        }
    } else {
        DislikeTransition {
            next: DislikeState::Disliked,
            dislikes_nr: authoritative_count + 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DislikeToggle {
    pub disliked: bool,
    pub dislikes_nr: u64,
}

pub struct DislikeService<'a, D, T, U>
where
    D: DislikesRepositoryInterface,
    T: TuitsRepositoryInterface,
    U: UsersRepositoryInterface,
{
    ctx: &'a Ctx,
    dislikes_repository: &'a D,
    tuits_repository: &'a T,
    users_repository: &'a U,
    locks: &'a KeyedLocks,
}

impl<'a, D, T, U> DislikeService<'a, D, T, U>
where
    D: DislikesRepositoryInterface,
    T: TuitsRepositoryInterface,
    U: UsersRepositoryInterface,
{
    pub fn new(
        ctx: &'a Ctx,
        dislikes_repository: &'a D,
        tuits_repository: &'a T,
        users_repository: &'a U,
        locks: &'a KeyedLocks,
    ) -> Self {
        Self {
            ctx,
            dislikes_repository,
            tuits_repository,
            users_repository,
            locks,
        }
    }

    /// Flips the dislike of `user` on `tuit`. The store commits the edge change and
    /// the counter write together; the per-tuit lock only orders toggles in this process.
    pub async fn toggle(&self, user: &Thing, tuit: &Thing) -> CtxResult<DislikeToggle> {
        let _guard = self.locks.lock(&tuit.to_raw()).await;

        self.tuits_repository
            .get_by_id(tuit)
            .await
            .map_err(|e| self.ctx.to_ctx_error(e))?;
        self.users_repository
            .get_by_id(user)
            .await
            .map_err(|e| self.ctx.to_ctx_error(e))?;

        let existing = self
            .dislikes_repository
            .get(user, tuit)
            .await
            .map_err(|e| self.ctx.to_ctx_error(e))?;
        let count = self
            .dislikes_repository
            .count_by_tuit(tuit)
            .await
            .map_err(|e| self.ctx.to_ctx_error(e))?;

        let transition = plan_toggle(existing.is_some(), count);
        let dislikes_nr = match transition.next {
            DislikeState::Disliked => self.dislikes_repository.create(user, tuit).await,
            DislikeState::NotDisliked => self.dislikes_repository.delete(user, tuit).await,
        }
        .map_err(|e| self.ctx.to_ctx_error(e))?;

        if dislikes_nr != transition.dislikes_nr {
            debug!(
                tuit = %tuit.to_raw(),
                planned = transition.dislikes_nr,
                written = dislikes_nr,
                "dislike count moved since it was read"
            );
        }

        info!(
            user = %user.to_raw(),
            tuit = %tuit.to_raw(),
            state = ?transition.next,
            dislikes_nr,
            "dislike toggled"
        );

        Ok(DislikeToggle {
            disliked: transition.next == DislikeState::Disliked,
            dislikes_nr,
        })
    }

    pub async fn dislikers_of(&self, tuit: &Thing) -> CtxResult<Vec<LocalUser>> {
        let dislikes = self
            .dislikes_repository
            .get_by_tuit(tuit)
            .await
            .map_err(|e| self.ctx.to_ctx_error(e))?;

        let users = dislikes.into_iter().map(|d| d.r#in).collect();
        self.users_repository
            .get_by_ids(users)
            .await
            .map_err(|e| self.ctx.to_ctx_error(e))
    }

    pub async fn disliked_tuits_of(&self, user: &Thing) -> CtxResult<Vec<TuitView>> {
        let dislikes = self
            .dislikes_repository
            .get_by_user(user)
            .await
            .map_err(|e| self.ctx.to_ctx_error(e))?;

        let tuits = dislikes.into_iter().map(|d| d.out).collect();
        self.tuits_repository
            .get_views_by_ids(tuits)
            .await
            .map_err(|e| self.ctx.to_ctx_error(e))
    }

    pub async fn find_dislike(&self, user: &Thing, tuit: &Thing) -> CtxResult<Option<Dislike>> {
        self.dislikes_repository
            .get(user, tuit)
            .await
            .map_err(|e| self.ctx.to_ctx_error(e))
    }

    pub async fn has_disliked(&self, user: &Thing, tuit: &Thing) -> CtxResult<bool> {
        Ok(self.find_dislike(user, tuit).await?.is_some())
    }
}
