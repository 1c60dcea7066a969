//! HTTP response envelope
//!
//! Every router answers with an [`HttpBaseResponse`]. Exactly one side is
//! populated: `data` on success (2xx), `error`/`message` on failure (4xx/5xx).

use serde::Serialize;
use serde_json::Value;

use crate::error::app_error::AppError;

/// Message sent for every server-side failure; the cause is only logged.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Unexpected error";

/// Transport-shaped result of a router call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HttpBaseResponse {
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<AppError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Request-to-response contract implemented by every router.
///
/// A router never fails: every error is mapped into the envelope.
#[trait_variant::make(Route: Send)]
pub trait LocalRoute<Req> {
    async fn route(&self, request: Req) -> HttpBaseResponse;
}

impl HttpBaseResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Constructors for [`HttpBaseResponse`].
pub struct HttpResponse;

impl HttpResponse {
    /// 200 with `data`
    pub fn ok(data: impl Serialize) -> HttpBaseResponse {
        Self::with_data(200, data)
    }

    /// 201 with `data`
    pub fn created(data: impl Serialize) -> HttpBaseResponse {
        Self::with_data(201, data)
    }

    /// 400 carrying the error and its message
    pub fn bad_request(error: AppError) -> HttpBaseResponse {
        HttpBaseResponse {
            status: error.status_code(),
            data: None,
            message: Some(error.message()),
            error: Some(error),
        }
    }

    /// 500 with the generic message and no error detail
    pub fn server_error() -> HttpBaseResponse {
        HttpBaseResponse {
            status: 500,
            data: None,
            error: None,
            message: Some(UNEXPECTED_ERROR_MESSAGE.to_string()),
        }
    }

    /// Map a failure to its response.
    ///
    /// Client errors are echoed back; everything else is logged and
    /// generalized to a 500.
    pub fn from_error(error: AppError) -> HttpBaseResponse {
        match error {
            AppError::MissingParam(_) | AppError::InvalidParam(_) => {
                tracing::debug!(error = %error, "Rejected request");
                Self::bad_request(error)
            }
            AppError::Database(_) | AppError::Crypto(_) | AppError::Unexpected(_) => {
                tracing::error!(error = %error, kind = error.name(), "Request failed");
                Self::server_error()
            }
        }
    }

    fn with_data(status: u16, data: impl Serialize) -> HttpBaseResponse {
        match serde_json::to_value(data) {
            Ok(value) => HttpBaseResponse {
                status,
                data: Some(value),
                error: None,
                message: None,
            },
            Err(e) => Self::from_error(e.into()),
        }
    }
}
