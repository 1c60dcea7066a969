//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, repository and capability traits
//! - `application/` - Use cases, validation chains, configuration
//! - `infra/` - Database, Argon2 and JWT implementations
//! - `presentation/` - Routers, HTTP handlers, DTOs, axum router
//!
//! ## Features
//! - Sign up with username + password + email
//! - Login with username + password, answered with a JWT access token
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (optional application pepper)
//! - Tokens carry only the public profile (`username`, `email`)
//! - Server-side failures are logged, never echoed to the client

pub mod application;
pub mod domain;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use infra::postgres::PgUserRepository;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::application::{LoginDto, SignUpDto};
    pub use crate::domain::entity::user::*;
    pub use crate::presentation::dto::*;
}
