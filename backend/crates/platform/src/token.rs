//! Access Token Signing
//!
//! HS256 JWTs carrying an arbitrary serializable payload plus the
//! registered `iat` / `exp` claims.

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token signing/verification errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// Payload could not be encoded or signed
    #[error("Token encoding failed: {0}")]
    Encoding(#[source] jsonwebtoken::errors::Error),

    /// `exp` is in the past
    #[error("Token expired")]
    Expired,

    /// Bad signature, malformed token or unexpected claims
    #[error("Invalid token")]
    Invalid,
}

/// Payload with registered claims
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims<T> {
    #[serde(flatten)]
    pub payload: T,
    /// Issued At (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
}

/// HS256 signer/verifier bound to one secret
#[derive(Clone)]
pub struct JwtSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl JwtSigner {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    /// Sign `payload`, stamping `iat = now` and `exp = now + ttl`.
    pub fn sign<T>(&self, payload: &T) -> Result<String, TokenError>
    where
        T: Serialize,
    {
        let iat = Utc::now().timestamp();
        let ttl = i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX);
        let claims = Claims {
            payload,
            iat,
            exp: iat.saturating_add(ttl),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(TokenError::Encoding)
    }

    /// Check signature and expiry, returning the claims.
    pub fn verify<T>(&self, token: &str) -> Result<Claims<T>, TokenError>
    where
        T: DeserializeOwned,
    {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims<T>>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}
