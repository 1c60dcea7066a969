//! JWT access tokens

use std::time::Duration;

use kernel::error::app_error::{AppError, AppResult, ResultExt};
use platform::token::{Claims, JwtSigner, TokenError};

use crate::domain::service::{Token, TokenPayload};

/// [`Token`] issuing HS256 JWTs
#[derive(Clone)]
pub struct JwtToken {
    signer: JwtSigner,
}

impl JwtToken {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            signer: JwtSigner::new(secret, ttl),
        }
    }

    /// Decode a token issued by [`Token::sign`]
    pub fn verify(&self, token: &str) -> Result<Claims<TokenPayload>, TokenError> {
        self.signer.verify(token)
    }
}

impl Token for JwtToken {
    fn sign(&self, payload: &TokenPayload) -> AppResult<String> {
        self.signer.sign(payload).map_app_err(AppError::Unexpected)
    }
}
