//! Domain Entities

use chrono::{DateTime, Utc};

use crate::domain::value_objects::PortfolioId;

/// A named collection owned by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portfolio {
    pub id: PortfolioId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Portfolio {
    /// Create a new portfolio with a fresh id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PortfolioId::new(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}
