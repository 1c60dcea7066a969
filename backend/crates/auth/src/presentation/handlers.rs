//! HTTP Handlers
//!
//! Thin axum adapters: read the JSON body, hand it to a router and write
//! the envelope back with its status. Only JSON objects are accepted.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use kernel::error::app_error::{AppError, AppResult};
use kernel::response::{HttpBaseResponse, HttpResponse, Route};
use kernel::validation::JsonBody;
use serde_json::Value;

use crate::application::{LoginDto, SignUpDto};

/// Shared state for auth handlers
pub struct AuthAppState<L, S> {
    pub login: Arc<L>,
    pub sign_up: Arc<S>,
}

impl<L, S> Clone for AuthAppState<L, S> {
    fn clone(&self) -> Self {
        Self {
            login: self.login.clone(),
            sign_up: self.sign_up.clone(),
        }
    }
}

fn json_body(body: Result<Json<Value>, JsonRejection>) -> AppResult<JsonBody> {
    let Json(value) = body.map_err(AppError::from)?;
    JsonBody::try_from(value)
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/login
pub async fn login<L, S>(
    State(state): State<AuthAppState<L, S>>,
    body: Result<Json<Value>, JsonRejection>,
) -> HttpBaseResponse
where
    L: Route<LoginDto> + Send + Sync + 'static,
    S: Route<SignUpDto> + Send + Sync + 'static,
{
    match json_body(body) {
        Ok(body) => state.login.route(LoginDto::from(&body)).await,
        Err(error) => HttpResponse::from_error(error),
    }
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/signup
pub async fn sign_up<L, S>(
    State(state): State<AuthAppState<L, S>>,
    body: Result<Json<Value>, JsonRejection>,
) -> HttpBaseResponse
where
    L: Route<LoginDto> + Send + Sync + 'static,
    S: Route<SignUpDto> + Send + Sync + 'static,
{
    match json_body(body) {
        Ok(body) => state.sign_up.route(SignUpDto::from(&body)).await,
        Err(error) => HttpResponse::from_error(error),
    }
}
