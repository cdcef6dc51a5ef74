use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::db::DbError;

/// Boundary error type. Every failure path is rendered as the uniform
/// `{success: false, error: <code>, message: <text>}` JSON body; the payload
/// strings are logged, never sent to the caller.
#[derive(Debug)]
pub enum AppError {
    NotFound,
    BadRequest(&'static str),
    Unprocessable(&'static str),
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "resource not found"),
            AppError::BadRequest(detail) => {
                tracing::debug!("bad request: {detail}");
                (StatusCode::BAD_REQUEST, "bad request")
            }
            AppError::Unprocessable(detail) => {
                tracing::debug!("unprocessable: {detail}");
                (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable")
            }
            AppError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "internal server error"),
        };

        let body = Json(json!({
            "success": false,
            "error": code.as_u16(),
            "message": message,
        }));

        (code, body).into_response()
    }
}

impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound => AppError::NotFound,
            DbError::Constraint(msg) => {
                tracing::warn!("constraint violation: {msg}");
                AppError::BadRequest("constraint violation")
            }
            DbError::Sqlx(e) => {
                tracing::error!("database error: {e}");
                AppError::Internal
            }
        }
    }
}
