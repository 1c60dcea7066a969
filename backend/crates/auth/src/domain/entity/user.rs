//! User Entity
//!
//! A registered account. Identity is the user name; the password is only
//! ever held here in hashed form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// User name (unique, login identity)
    pub username: String,
    /// Password hash (PHC string)
    pub password: String,
    /// E-mail address (unique)
    pub email: String,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new, not yet persisted user
    pub fn new(
        username: impl Into<String>,
        password_hash: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            username: username.into(),
            password: password_hash.into(),
            email: email.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Public part of the user, safe to embed in a token
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }
}

/// User fields that may leave the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
}
