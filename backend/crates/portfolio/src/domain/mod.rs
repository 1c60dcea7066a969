//! Domain Layer

pub mod entities;
pub mod repository;
pub mod value_objects;

pub use entities::Portfolio;
pub use repository::PortfolioRepository;
pub use value_objects::PortfolioId;
