//! Domain Layer
//!
//! Contains entities, repository traits and the capabilities the use cases
//! depend on.

pub mod entity;
pub mod repository;
pub mod service;

// Re-exports
pub use entity::user::{User, UserProfile};
pub use repository::UserRepository;
pub use service::{Crypto, Token, TokenPayload};
