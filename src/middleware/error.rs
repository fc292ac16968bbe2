use std::fmt;

use axum::{http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CtxError {
    pub error: AppError,
    pub req_id: Uuid,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppError {
    Generic { description: String },
    AuthenticationFail,
    EntityFailIdNotFound { ident: String },
    EntityAlreadyExists { ident: String },
    SurrealDb { source: String },
}

/// Error returned from request handlers, carries the req_id reported to the client.
pub type CtxResult<T> = core::result::Result<T, CtxError>;
/// Any error produced before a response is composed.
pub type AppResult<T> = core::result::Result<T, AppError>;

impl std::error::Error for AppError {}

const INTERNAL: &str = "Internal error";

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic { description } => write!(f, "{description}"),
            Self::AuthenticationFail => write!(f, "You are not logged in"),
            Self::EntityFailIdNotFound { ident } => write!(f, "Record id= {ident} not found"),
            Self::EntityAlreadyExists { ident } => write!(f, "Record {ident} already exists"),
            Self::SurrealDb { .. } => write!(f, "{INTERNAL}"),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::AuthenticationFail => StatusCode::UNAUTHORIZED,
            AppError::EntityFailIdNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::EntityAlreadyExists { .. } => StatusCode::CONFLICT,
            AppError::Generic { .. } => StatusCode::BAD_REQUEST,
            AppError::SurrealDb { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponseBody {
    pub error: String,
    pub req_id: String,
}

impl IntoResponse for CtxError {
    fn into_response(self) -> axum::response::Response {
        let status_code = self.error.status_code();
        if status_code.is_server_error() {
            error!(req_id = %self.req_id, error = ?self.error, "request failed");
        }
        let body = ErrorResponseBody {
            error: self.error.to_string(),
            req_id: self.req_id.to_string(),
        };
        let mut response = (status_code, axum::Json(body)).into_response();
        // the real error is kept for the trace layer
        response.extensions_mut().insert(self.error);
        response
    }
}

impl From<surrealdb::Error> for AppError {
    fn from(value: surrealdb::Error) -> Self {
        Self::SurrealDb {
            source: value.to_string(),
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(_: jsonwebtoken::errors::Error) -> Self {
        Self::AuthenticationFail
    }
}
