//! Create Portfolio Router

use std::sync::Arc;

use kernel::error::app_error::AppResult;
use kernel::response::{HttpBaseResponse, HttpResponse, Route};
use kernel::validation::ValidatorChain;

use crate::application::create_portfolio::{CreatePortfolioDto, CreatePortfolioUseCase};
use crate::domain::entities::Portfolio;
use crate::presentation::dto::PortfolioResponse;

/// Validates the name, runs [`CreatePortfolioUseCase`] and answers 201 `{ portfolio }`
pub struct CreatePortfolioRouter<P> {
    validator_chain: Arc<ValidatorChain>,
    create_portfolio_use_case: Arc<P>,
}

impl<P> CreatePortfolioRouter<P>
where
    P: CreatePortfolioUseCase + Send + Sync,
{
    pub fn new(validator_chain: Arc<ValidatorChain>, create_portfolio_use_case: Arc<P>) -> Self {
        Self {
            validator_chain,
            create_portfolio_use_case,
        }
    }

    async fn create(&self, request: CreatePortfolioDto) -> AppResult<Portfolio> {
        self.validator_chain.handle(&request)?;
        self.create_portfolio_use_case.create(request).await
    }
}

impl<P> Route<CreatePortfolioDto> for CreatePortfolioRouter<P>
where
    P: CreatePortfolioUseCase + Send + Sync,
{
    async fn route(&self, request: CreatePortfolioDto) -> HttpBaseResponse {
        match self.create(request).await {
            Ok(portfolio) => HttpResponse::created(PortfolioResponse::from(portfolio)),
            Err(error) => HttpResponse::from_error(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::create_portfolio::{CreatePortfolio, create_portfolio_chain};
    use crate::tests::doubles::PortfolioRepositorySpy;
    use kernel::error::app_error::AppError;

    fn make_sut(repo: PortfolioRepositorySpy) -> CreatePortfolioRouter<CreatePortfolio<PortfolioRepositorySpy>> {
        let chain = Arc::new(create_portfolio_chain());
        let use_case = CreatePortfolio::new(chain.clone(), Arc::new(repo));
        CreatePortfolioRouter::new(chain, Arc::new(use_case))
    }

    #[tokio::test]
    async fn test_created() {
        let sut = make_sut(PortfolioRepositorySpy::default());

        let response = sut.route(CreatePortfolioDto::new("valid_name")).await;

        assert_eq!(response.status, 201);
        let data = response.data.unwrap();
        assert_eq!(data["portfolio"]["name"], "valid_name");
        assert!(data["portfolio"]["id"].as_str().is_some());
        assert!(data["portfolio"]["createdAt"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_empty_name() {
        let sut = make_sut(PortfolioRepositorySpy::default());

        let response = sut.route(CreatePortfolioDto::new("")).await;

        assert_eq!(response.status, 400);
        assert_eq!(response.error, Some(AppError::missing_param("name")));
    }

    #[tokio::test]
    async fn test_long_name() {
        let sut = make_sut(PortfolioRepositorySpy::default());

        let response = sut.route(CreatePortfolioDto::new("n".repeat(51))).await;

        assert_eq!(response.status, 400);
        assert_eq!(
            response.message.as_deref(),
            Some("name must be at most 50 characters long")
        );
    }

    #[tokio::test]
    async fn test_database_failure_is_500() {
        let sut = make_sut(PortfolioRepositorySpy::failing_insert(AppError::database(
            "Database connection error",
        )));

        let response = sut.route(CreatePortfolioDto::new("valid_name")).await;

        assert_eq!(response.status, 500);
        assert!(response.error.is_none());
        assert_eq!(response.message.as_deref(), Some("Unexpected error"));
    }
}
