//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use kernel::error::app_error::AppError;
use kernel::response::{HttpBaseResponse, HttpResponse, Route};
use kernel::validation::JsonBody;
use serde_json::Value;

use crate::application::create_portfolio::CreatePortfolioDto;

/// Shared state for portfolio handlers
pub struct PortfolioAppState<P> {
    pub create: Arc<P>,
}

impl<P> Clone for PortfolioAppState<P> {
    fn clone(&self) -> Self {
        Self {
            create: self.create.clone(),
        }
    }
}

/// POST /api/portfolios
pub async fn create_portfolio<P>(
    State(state): State<PortfolioAppState<P>>,
    body: Result<Json<Value>, JsonRejection>,
) -> HttpBaseResponse
where
    P: Route<CreatePortfolioDto> + Send + Sync + 'static,
{
    let body = body
        .map_err(AppError::from)
        .and_then(|Json(value)| JsonBody::try_from(value));

    match body {
        Ok(body) => state.create.route(CreatePortfolioDto::from(&body)).await,
        Err(error) => HttpResponse::from_error(error),
    }
}
