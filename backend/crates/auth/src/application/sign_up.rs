//! Sign Up Use Case
//!
//! Creates a new user account and logs it in.

use std::fmt;
use std::sync::Arc;

use kernel::error::app_error::AppResult;
use kernel::validation::{Fields, JsonBody, ValidatorChain};

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::service::{Crypto, Token, TokenPayload};

/// Sign up input
#[derive(Clone, Default)]
pub struct SignUpDto {
    pub username: String,
    pub password: String,
    pub email: String,
}

impl SignUpDto {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            email: email.into(),
        }
    }
}

impl From<&JsonBody> for SignUpDto {
    fn from(body: &JsonBody) -> Self {
        Self::new(
            body.text("username"),
            body.text("password"),
            body.text("email"),
        )
    }
}

impl Fields for SignUpDto {
    fn field(&self, key: &str) -> Option<&str> {
        match key {
            "username" => Some(&self.username),
            "password" => Some(&self.password),
            "email" => Some(&self.email),
            _ => None,
        }
    }
}

impl fmt::Debug for SignUpDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpDto")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("email", &self.email)
            .finish()
    }
}

/// Sign up contract
#[trait_variant::make(SignUpUseCase: Send)]
pub trait LocalSignUpUseCase {
    /// Access token for the newly registered user
    async fn sign_up(&self, sign_up: SignUpDto) -> AppResult<String>;
}

/// Sign up use case
pub struct SignUp<U, C, T>
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

impl<U, C, T> SignUp<U, C, T>
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

impl<U, C, T> SignUpUseCase for SignUp<U, C, T>
where
    U: UserRepository + Send + Sync,
    C: Crypto + Send + Sync,
    T: Token,
{
    async fn sign_up(&self, sign_up: SignUpDto) -> AppResult<String> {
        self.validator_chain.handle(&sign_up)?;

        let password_hash = self.crypto.hash(&sign_up.password).await?;

        // Uniqueness of user name and e-mail is left to the store
        let user = self
            .user_repo
            .insert(User::new(sign_up.username, password_hash, sign_up.email))
            .await?;

        let access_token = self.token.sign(&TokenPayload::from(&user))?;

        tracing::info!(
            username = %user.username,
            email = %user.email,
            "User signed up"
        );

        Ok(access_token)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use kernel::error::app_error::AppError;
    use kernel::validation::{Fields, JsonBody};

    use super::{SignUp, SignUpDto, SignUpUseCase};
    use crate::application::validation::sign_up_chain;
    use crate::tests::doubles::{CryptoStub, HASHED_PASSWORD, TokenSpy, UserRepositorySpy};

    struct Sut {
        sign_up: SignUp<UserRepositorySpy, CryptoStub, TokenSpy>,
        user_repo: Arc<UserRepositorySpy>,
        crypto: Arc<CryptoStub>,
        token: Arc<TokenSpy>,
    }

    fn make_sut(user_repo: UserRepositorySpy, crypto: CryptoStub) -> Sut {
        let user_repo = Arc::new(user_repo);
        let crypto = Arc::new(crypto);
        let token = Arc::new(TokenSpy::default());
        let sign_up = SignUp::new(
            Arc::new(sign_up_chain()),
            user_repo.clone(),
            crypto.clone(),
            token.clone(),
        );
        Sut {
            sign_up,
            user_repo,
            crypto,
            token,
        }
    }

    fn valid_dto() -> SignUpDto {
        SignUpDto::new("valid_username", "valid_password", "valid_email@mail.com")
    }

    #[tokio::test]
    async fn test_sign_up_returns_token() {
        let sut = make_sut(UserRepositorySpy::empty(), CryptoStub::default());

        let token = sut.sign_up.sign_up(valid_dto()).await.unwrap();

        assert_eq!(token, "token_for_valid_username");
        assert_eq!(sut.token.calls(), 1);
    }

    #[tokio::test]
    async fn test_password_is_hashed_before_insert() {
        let sut = make_sut(UserRepositorySpy::empty(), CryptoStub::default());

        sut.sign_up.sign_up(valid_dto()).await.unwrap();

        let inserted = sut.user_repo.inserted();
        assert_eq!(inserted.len(), 1);
        assert_eq!(inserted[0].username, "valid_username");
        assert_eq!(inserted[0].email, "valid_email@mail.com");
        assert_eq!(inserted[0].password, HASHED_PASSWORD);
        assert_eq!(sut.crypto.hash_calls(), 1);
    }

    #[tokio::test]
    async fn test_registered_user_error_propagates() {
        let error = AppError::database("user with username registered_user is already registered");
        let sut = make_sut(UserRepositorySpy::failing_insert(error.clone()), CryptoStub::default());

        let result = sut
            .sign_up
            .sign_up(SignUpDto::new(
                "registered_user",
                "valid_password",
                "valid_email@mail.com",
            ))
            .await;

        assert_eq!(result, Err(error));
        assert_eq!(
            result.unwrap_err().to_string(),
            "user with username registered_user is already registered"
        );
        assert_eq!(sut.token.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_username_stops_before_downstream() {
        let sut = make_sut(UserRepositorySpy::empty(), CryptoStub::default());

        let result = sut
            .sign_up
            .sign_up(SignUpDto::new("", "valid_password", "valid_email@mail.com"))
            .await;

        assert_eq!(result, Err(AppError::missing_param("username")));
        assert_eq!(sut.crypto.hash_calls(), 0);
        assert!(sut.user_repo.inserted().is_empty());
        assert_eq!(sut.token.calls(), 0);
    }

    #[tokio::test]
    async fn test_chain_order() {
        let sut = make_sut(UserRepositorySpy::empty(), CryptoStub::default());

        // username is checked first, even when every field is bad
        let result = sut
            .sign_up
            .sign_up(SignUpDto::new("ab", "short", "invalid_email"))
            .await;
        assert_eq!(
            result,
            Err(AppError::invalid_param("username must be at least 3 characters long"))
        );

        let result = sut
            .sign_up
            .sign_up(SignUpDto::new("valid_username", "valid_password", "invalid_email"))
            .await;
        assert_eq!(result, Err(AppError::invalid_param("email must be a valid email")));
        assert_eq!(sut.crypto.hash_calls(), 0);
    }

    #[tokio::test]
    async fn test_hash_failure_propagates() {
        let sut = make_sut(
            UserRepositorySpy::empty(),
            CryptoStub::failing(AppError::crypto("Password hashing failed")),
        );

        let result = sut.sign_up.sign_up(valid_dto()).await;

        assert_eq!(result, Err(AppError::crypto("Password hashing failed")));
        assert!(sut.user_repo.inserted().is_empty());
    }

    #[test]
    fn test_dto_from_body() {
        let body = JsonBody::try_from(serde_json::json!({
            "username": "valid_username",
            "password": null,
            "email": 42
        }))
        .unwrap();
        let dto = SignUpDto::from(&body);
        assert_eq!(dto.field("username"), Some("valid_username"));
        assert_eq!(dto.field("password"), Some(""));
        assert_eq!(dto.field("email"), Some(""));
    }
}
