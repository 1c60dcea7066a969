//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod login;
pub mod sign_up;
pub mod validation;

// Re-exports
pub use config::AuthConfig;
pub use login::{Auth, AuthUseCase, LoginDto};
pub use sign_up::{SignUp, SignUpDto, SignUpUseCase};
