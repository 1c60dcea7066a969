//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::error::app_error::AppResult;
use sqlx::PgPool;

use crate::domain::entities::Portfolio;
use crate::domain::repository::PortfolioRepository;
use crate::domain::value_objects::PortfolioId;

/// PostgreSQL-backed portfolio repository
#[derive(Clone)]
pub struct PgPortfolioRepository {
    pool: PgPool,
}

impl PgPortfolioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PortfolioRepository for PgPortfolioRepository {
    async fn insert(&self, portfolio: Portfolio) -> AppResult<Portfolio> {
        let row = sqlx::query_as::<_, PortfolioRow>(
            r#"
            INSERT INTO portfolios (id, name, created_at)
            VALUES ($1, $2, $3)
            RETURNING id, name, created_at
            "#,
        )
        .bind(portfolio.id)
        .bind(&portfolio.name)
        .bind(portfolio.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_portfolio())
    }
}

#[derive(sqlx::FromRow)]
struct PortfolioRow {
    id: PortfolioId,
    name: String,
    created_at: DateTime<Utc>,
}

impl PortfolioRow {
    fn into_portfolio(self) -> Portfolio {
        Portfolio {
            id: self.id,
            name: self.name,
            created_at: self.created_at,
        }
    }
}
