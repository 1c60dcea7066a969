//! Create Portfolio Use Case

use std::sync::Arc;

use kernel::error::app_error::AppResult;
use kernel::validation::rules::PortfolioNameValidator;
use kernel::validation::{Fields, JsonBody, ValidatorChain};

use crate::domain::entities::Portfolio;
use crate::domain::repository::PortfolioRepository;

/// Create portfolio input
#[derive(Debug, Clone, Default)]
pub struct CreatePortfolioDto {
    pub name: String,
}

impl CreatePortfolioDto {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<&JsonBody> for CreatePortfolioDto {
    fn from(body: &JsonBody) -> Self {
        Self::new(body.text("name"))
    }
}

impl Fields for CreatePortfolioDto {
    fn field(&self, key: &str) -> Option<&str> {
        match key {
            "name" => Some(&self.name),
            _ => None,
        }
    }
}

/// name
pub fn create_portfolio_chain() -> ValidatorChain {
    ValidatorChain::new().set_next(PortfolioNameValidator)
}

/// Create portfolio contract
#[trait_variant::make(CreatePortfolioUseCase: Send)]
pub trait LocalCreatePortfolioUseCase {
    async fn create(&self, request: CreatePortfolioDto) -> AppResult<Portfolio>;
}

/// Create portfolio use case
pub struct CreatePortfolio<R>
where
    R: PortfolioRepository,
{
    validator_chain: Arc<ValidatorChain>,
    repo: Arc<R>,
}

impl<R> CreatePortfolio<R>
where
    R: PortfolioRepository,
{
    pub fn new(validator_chain: Arc<ValidatorChain>, repo: Arc<R>) -> Self {
        Self {
            validator_chain,
            repo,
        }
    }
}

impl<R> CreatePortfolioUseCase for CreatePortfolio<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn create(&self, request: CreatePortfolioDto) -> AppResult<Portfolio> {
        self.validator_chain.handle(&request)?;

        let portfolio = self.repo.insert(Portfolio::new(request.name)).await?;

        tracing::info!(
            portfolio_id = %portfolio.id,
            name = %portfolio.name,
            "Portfolio created"
        );

        Ok(portfolio)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use kernel::error::app_error::AppError;
    use kernel::validation::JsonBody;

    use super::{
        CreatePortfolio, CreatePortfolioDto, CreatePortfolioUseCase, create_portfolio_chain,
    };
    use crate::tests::doubles::PortfolioRepositorySpy;

    fn make_sut() -> (CreatePortfolio<PortfolioRepositorySpy>, Arc<PortfolioRepositorySpy>) {
        let repo = Arc::new(PortfolioRepositorySpy::default());
        let sut = CreatePortfolio::new(Arc::new(create_portfolio_chain()), repo.clone());
        (sut, repo)
    }

    #[tokio::test]
    async fn test_creates_with_fresh_id() {
        let (sut, repo) = make_sut();

        let first = sut.create(CreatePortfolioDto::new("valid_name")).await.unwrap();
        let second = sut.create(CreatePortfolioDto::new("valid_name")).await.unwrap();

        assert_eq!(first.name, "valid_name");
        assert_ne!(first.id, second.id);
        assert_eq!(repo.inserted().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_name_is_missing() {
        let (sut, repo) = make_sut();

        let result = sut.create(CreatePortfolioDto::new("")).await;

        assert_eq!(result, Err(AppError::missing_param("name")));
        assert!(repo.inserted().is_empty());
    }

    #[tokio::test]
    async fn test_long_name_is_invalid() {
        let (sut, repo) = make_sut();

        let result = sut.create(CreatePortfolioDto::new("n".repeat(51))).await;

        assert_eq!(
            result,
            Err(AppError::invalid_param("name must be at most 50 characters long"))
        );
        assert!(repo.inserted().is_empty());
    }

    #[tokio::test]
    async fn test_null_name_is_missing() {
        let (sut, _) = make_sut();
        let body = JsonBody::try_from(serde_json::json!({ "name": null })).unwrap();

        let result = sut.create(CreatePortfolioDto::from(&body)).await;

        assert_eq!(result, Err(AppError::missing_param("name")));
    }
}
