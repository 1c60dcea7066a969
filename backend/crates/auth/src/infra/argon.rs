//! Argon2id password hashing
//!
//! Hashing is CPU-bound, so both operations run on the blocking pool.

use std::sync::Arc;

use kernel::error::app_error::{AppError, AppResult, ResultExt};
use platform::password::{ClearTextPassword, HashedPassword};
use tokio::task;

use crate::domain::service::Crypto;

/// [`Crypto`] backed by Argon2id PHC strings
#[derive(Clone, Default)]
pub struct ArgonCrypto {
    pepper: Option<Arc<[u8]>>,
}

impl ArgonCrypto {
    pub fn new(pepper: Option<&[u8]>) -> Self {
        Self {
            pepper: pepper.map(Arc::from),
        }
    }
}

impl Crypto for ArgonCrypto {
    async fn hash(&self, raw: &str) -> AppResult<String> {
        let password = ClearTextPassword::new(raw);
        let pepper = self.pepper.clone();

        let hashed = task::spawn_blocking(move || password.hash(pepper.as_deref()))
            .await
            .map_app_err(AppError::Unexpected)?
            .map_app_err(AppError::Crypto)?;

        Ok(hashed.into_phc_string())
    }

    async fn compare(&self, raw: &str, hashed: &str) -> AppResult<bool> {
        let hashed = HashedPassword::from_phc_string(hashed).map_app_err(AppError::Crypto)?;
        let password = ClearTextPassword::new(raw);
        let pepper = self.pepper.clone();

        task::spawn_blocking(move || hashed.verify(&password, pepper.as_deref()))
            .await
            .map_app_err(AppError::Unexpected)?
            .map_app_err(AppError::Crypto)
    }
}
