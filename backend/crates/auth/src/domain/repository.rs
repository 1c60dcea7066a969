//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::error::app_error::AppResult;

use crate::domain::entity::user::User;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Find user by user name
    async fn find_one_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Persist a new user and return the stored row
    ///
    /// A taken user name or e-mail is reported as `AppError::Database`.
    async fn insert(&self, user: User) -> AppResult<User>;
}
