//! Application Layer

pub mod create_portfolio;

pub use create_portfolio::{
    CreatePortfolio, CreatePortfolioDto, CreatePortfolioUseCase, create_portfolio_chain,
};
