//! Login Router

use std::sync::Arc;

use kernel::error::app_error::AppResult;
use kernel::response::{HttpBaseResponse, HttpResponse, Route};
use kernel::validation::ValidatorChain;

use crate::application::login::{AuthUseCase, LoginDto};
use crate::presentation::dto::AccessTokenResponse;

/// Validates the credentials, runs [`AuthUseCase`] and answers 200 `{ accessToken }`
pub struct LoginRouter<A> {
    validator_chain: Arc<ValidatorChain>,
    auth_use_case: Arc<A>,
}

impl<A> LoginRouter<A>
where
    A: AuthUseCase + Send + Sync,
{
    pub fn new(validator_chain: Arc<ValidatorChain>, auth_use_case: Arc<A>) -> Self {
        Self {
            validator_chain,
            auth_use_case,
        }
    }

    async fn login(&self, request: LoginDto) -> AppResult<Option<String>> {
        self.validator_chain.handle(&request)?;
        self.auth_use_case.auth(request).await
    }
}

impl<A> Route<LoginDto> for LoginRouter<A>
where
    A: AuthUseCase + Send + Sync,
{
    async fn route(&self, request: LoginDto) -> HttpBaseResponse {
        match self.login(request).await {
            Ok(access_token) => HttpResponse::ok(AccessTokenResponse { access_token }),
            Err(error) => HttpResponse::from_error(error),
        }
    }
}
