//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Portfolio;
use crate::domain::value_objects::PortfolioId;

/// `data` of a successful create
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioResponse {
    pub portfolio: PortfolioView,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioView {
    pub id: PortfolioId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<Portfolio> for PortfolioResponse {
    fn from(portfolio: Portfolio) -> Self {
        Self {
            portfolio: PortfolioView {
                id: portfolio.id,
                name: portfolio.name,
                created_at: portfolio.created_at,
            },
        }
    }
}
