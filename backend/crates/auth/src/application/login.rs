//! Login Use Case
//!
//! Exchanges a user name and password for an access token.

use std::fmt;
use std::sync::Arc;

use kernel::error::app_error::{AppError, AppResult};
use kernel::validation::{Fields, JsonBody, ValidatorChain};

use crate::domain::repository::UserRepository;
use crate::domain::service::{Crypto, Token, TokenPayload};

/// Returned for a wrong password; deliberately does not say which part was wrong
pub const INVALID_CREDENTIALS_MESSAGE: &str = "username or password is not correct";

/// Login input
#[derive(Clone, Default)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

impl LoginDto {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Absent, `null` or non-string fields become empty, so the validator chain
/// reports them as missing.
impl From<&JsonBody> for LoginDto {
    fn from(body: &JsonBody) -> Self {
        Self::new(body.text("username"), body.text("password"))
    }
}

impl Fields for LoginDto {
    fn field(&self, key: &str) -> Option<&str> {
        match key {
            "username" => Some(&self.username),
            "password" => Some(&self.password),
            _ => None,
        }
    }
}

impl fmt::Debug for LoginDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginDto")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Login contract
#[trait_variant::make(AuthUseCase: Send)]
pub trait LocalAuthUseCase {
    /// Access token for valid credentials, `None` if the user does not exist
    async fn auth(&self, login: LoginDto) -> AppResult<Option<String>>;
}

/// Login use case
pub struct Auth<U, C, T>
where
    U: UserRepository,
    C: Crypto,
    T: Token,
{
    validator_chain: Arc<ValidatorChain>,
    user_repo: Arc<U>,
    crypto: Arc<C>,
    token: Arc<T>,
}

impl<U, C, T> Auth<U, C, T>
where
    U: UserRepository,
    C: Crypto,
    T: Token,
{
    pub fn new(
        validator_chain: Arc<ValidatorChain>,
        user_repo: Arc<U>,
        crypto: Arc<C>,
        token: Arc<T>,
    ) -> Self {
        Self {
            validator_chain,
            user_repo,
            crypto,
            token,
        }
    }
}

impl<U, C, T> AuthUseCase for Auth<U, C, T>
where
    U: UserRepository + Send + Sync,
    C: Crypto + Send + Sync,
    T: Token,
{
    async fn auth(&self, login: LoginDto) -> AppResult<Option<String>> {
        self.validator_chain.handle(&login)?;

        let Some(user) = self
            .user_repo
            .find_one_by_username(&login.username)
            .await?
        else {
            tracing::debug!(username = %login.username, "Login for unknown user");
            return Ok(None);
        };

        if !self.crypto.compare(&login.password, &user.password).await? {
            tracing::warn!(username = %user.username, "Login with wrong password");
            return Err(AppError::invalid_param(INVALID_CREDENTIALS_MESSAGE));
        }

        let access_token = self.token.sign(&TokenPayload::from(&user))?;

        tracing::info!(username = %user.username, "User logged in");

        Ok(Some(access_token))
    }
}
