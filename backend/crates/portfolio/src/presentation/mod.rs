//! Presentation Layer

pub mod create_portfolio_router;
pub mod dto;
pub mod handlers;
pub mod router;

pub use create_portfolio_router::CreatePortfolioRouter;
pub use handlers::PortfolioAppState;
pub use router::{portfolio_router, portfolio_router_generic};
