use std::sync::Arc;

use super::error::{AppError, AppResult, CtxError, CtxResult};
use crate::middleware::mw_ctx::{CtxState, JWT_KEY};
use axum::{
    async_trait,
    extract::{FromRequestParts, State},
    http::{request::Parts, StatusCode},
};
use axum_extra::extract::cookie::CookieJar;
use axum_extra::headers::{authorization::Bearer, Authorization, HeaderMapExt};
use uuid::Uuid;

/// Per-request context. Holds the authenticated user id when a valid login token was sent.
#[derive(Clone, Debug)]
pub struct Ctx {
    result_user_id: AppResult<String>,
    req_id: Uuid,
}

impl Ctx {
    pub fn new(result_user_id: AppResult<String>) -> Self {
        Self {
            result_user_id,
            req_id: Uuid::new_v4(),
        }
    }

    pub fn user_id(&self) -> CtxResult<String> {
        self.result_user_id
            .clone()
            .map_err(|error| self.to_ctx_error(error))
    }

    pub fn req_id(&self) -> Uuid {
        self.req_id
    }

    pub fn to_ctx_error(&self, error: AppError) -> CtxError {
        CtxError {
            req_id: self.req_id,
            error,
        }
    }
}

fn token_from_parts(parts: &Parts) -> Option<String> {
    if let Some(bearer) = parts.headers.typed_get::<Authorization<Bearer>>() {
        return Some(bearer.token().to_string());
    }
    CookieJar::from_headers(&parts.headers)
        .get(JWT_KEY)
        .map(|cookie| cookie.value().to_string())
}

#[async_trait]
impl FromRequestParts<Arc<CtxState>> for Ctx {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<CtxState>,
    ) -> Result<Self, Self::Rejection> {
        let State(app_state): State<Arc<CtxState>> = State::from_request_parts(parts, state)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

        let jwt_user_id = match token_from_parts(parts) {
            Some(token) => app_state
                .jwt
                .decode_login(&token)
                .map(|claims| claims.auth),
            None => Err(AppError::AuthenticationFail),
        };

        Ok(Ctx::new(jwt_user_id))
    }
}
