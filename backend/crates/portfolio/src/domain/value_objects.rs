//! Value Objects

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

/// Portfolio identifier (UUID v4), serialized as its hyphenated string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct PortfolioId(Uuid);

impl PortfolioId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PortfolioId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for PortfolioId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for PortfolioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
