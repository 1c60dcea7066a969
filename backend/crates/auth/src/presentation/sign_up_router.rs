//! Sign Up Router

use std::sync::Arc;

use kernel::error::app_error::AppResult;
use kernel::response::{HttpBaseResponse, HttpResponse, Route};
use kernel::validation::ValidatorChain;

use crate::application::sign_up::{SignUpDto, SignUpUseCase};
use crate::presentation::dto::AccessTokenResponse;

/// Validates the registration, runs [`SignUpUseCase`] and answers 201 `{ accessToken }`
pub struct SignUpRouter<S> {
    validator_chain: Arc<ValidatorChain>,
    sign_up_use_case: Arc<S>,
}

impl<S> SignUpRouter<S>
where
    S: SignUpUseCase + Send + Sync,
{
    pub fn new(validator_chain: Arc<ValidatorChain>, sign_up_use_case: Arc<S>) -> Self {
        Self {
            validator_chain,
            sign_up_use_case,
        }
    }

    async fn sign_up(&self, request: SignUpDto) -> AppResult<String> {
        self.validator_chain.handle(&request)?;
        self.sign_up_use_case.sign_up(request).await
    }
}

impl<S> Route<SignUpDto> for SignUpRouter<S>
where
    S: SignUpUseCase + Send + Sync,
{
    async fn route(&self, request: SignUpDto) -> HttpBaseResponse {
        match self.sign_up(request).await {
            Ok(access_token) => HttpResponse::created(AccessTokenResponse {
                access_token: Some(access_token),
            }),
            Err(error) => HttpResponse::from_error(error),
        }
    }
}
