//! Capabilities
//!
//! Hashing and token signing, as seen from the use cases.

use kernel::error::app_error::AppResult;
use serde::{Deserialize, Serialize};

use crate::domain::entity::user::{User, UserProfile};

/// Password hashing
#[trait_variant::make(Crypto: Send)]
pub trait LocalCrypto {
    /// Hash a clear text password for storage
    async fn hash(&self, raw: &str) -> AppResult<String>;

    /// `Ok(false)` on mismatch, `Err` if the comparison could not be made
    async fn compare(&self, raw: &str, hashed: &str) -> AppResult<bool>;
}

/// Access token issuing
pub trait Token: Send + Sync {
    fn sign(&self, payload: &TokenPayload) -> AppResult<String>;
}

/// Claims describing the authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    pub user: UserProfile,
}

impl From<&User> for TokenPayload {
    fn from(user: &User) -> Self {
        Self {
            user: user.profile(),
        }
    }
}
