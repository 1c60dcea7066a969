//! Repository Traits

use kernel::error::app_error::AppResult;

use crate::domain::entities::Portfolio;

/// Portfolio repository trait
#[trait_variant::make(PortfolioRepository: Send)]
pub trait LocalPortfolioRepository {
    /// Persist a new portfolio and return the stored row
    async fn insert(&self, portfolio: Portfolio) -> AppResult<Portfolio>;
}
