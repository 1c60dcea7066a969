//! Portfolio Router

use std::sync::Arc;

use axum::{Router, routing::post};

use crate::application::create_portfolio::{CreatePortfolio, create_portfolio_chain};
use crate::domain::repository::PortfolioRepository;
use crate::infra::postgres::PgPortfolioRepository;
use crate::presentation::create_portfolio_router::CreatePortfolioRouter;
use crate::presentation::handlers::{self, PortfolioAppState};

/// Create the Portfolio router with PostgreSQL repository
pub fn portfolio_router(repo: PgPortfolioRepository) -> Router {
    portfolio_router_generic(repo)
}

/// Create a generic Portfolio router for any repository implementation
pub fn portfolio_router_generic<R>(repo: R) -> Router
where
    R: PortfolioRepository + Send + Sync + 'static,
{
    let chain = Arc::new(create_portfolio_chain());
    let use_case = CreatePortfolio::new(chain.clone(), Arc::new(repo));
    let state = PortfolioAppState {
        create: Arc::new(CreatePortfolioRouter::new(chain, Arc::new(use_case))),
    };

    Router::new()
        .route(
            "/portfolios",
            post(handlers::create_portfolio::<CreatePortfolioRouter<CreatePortfolio<R>>>),
        )
        .with_state(state)
}
