//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from common error types to [`AppError`],
//! and the axum response conversion for errors that escape a router.

use super::app_error::AppError;

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::unexpected(format!("JSON serialization error: {}", err))
    }
}

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

/// PostgreSQL unique_violation
/// https://www.postgresql.org/docs/current/errcodes-appendix.html
#[cfg(feature = "sqlx")]
pub const UNIQUE_VIOLATION: &str = "23505";

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) => match db_err.code() {
                Some(code) if code.as_ref() == UNIQUE_VIOLATION => {
                    AppError::database(format!("Duplicate key value: {}", db_err.message()))
                }
                _ => AppError::database(format!("Database error: {}", db_err.message())),
            },
            sqlx::Error::PoolTimedOut => AppError::database("Database connection pool exhausted"),
            sqlx::Error::Io(_) => AppError::database("Database connection error"),
            _ => AppError::database(format!("Database error: {}", err)),
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

/// Message for bodies that could not be read as the expected JSON object
pub const INVALID_BODY_MESSAGE: &str = "request body must be a valid JSON object";

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        tracing::debug!(rejection = %rejection.body_text(), "Unreadable request body");
        AppError::invalid_param(INVALID_BODY_MESSAGE)
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        crate::response::HttpResponse::from_error(self).into_response()
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for crate::response::HttpBaseResponse {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use http::StatusCode;

        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self)).into_response()
    }
}
