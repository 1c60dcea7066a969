//! Portfolio Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Portfolio entity, repository trait
//! - `application/` - Create use case and its validation chain
//! - `infra/` - Database implementation
//! - `presentation/` - Router, HTTP handler, DTOs

pub mod application;
pub mod domain;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use infra::postgres::PgPortfolioRepository;
pub use presentation::router::portfolio_router;

pub mod models {
    pub use crate::application::create_portfolio::CreatePortfolioDto;
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}
