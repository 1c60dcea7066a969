//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::secret::SecretBytes;

/// Length of generated token secrets (HS256 wants at least 32 bytes)
pub const TOKEN_SECRET_LENGTH: usize = 32;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HS256 secret for access tokens
    pub token_secret: SecretBytes,
    /// Access token lifetime
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<SecretBytes>,
}

/// Default access token lifetime (1 day)
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 3600);

impl AuthConfig {
    /// Create config signing with `token_secret`, default TTL and no pepper
    pub fn new(token_secret: SecretBytes) -> Self {
        Self {
            token_secret,
            token_ttl: DEFAULT_TOKEN_TTL,
            password_pepper: None,
        }
    }

    /// Create config with a random token secret
    ///
    /// Tokens signed with it do not survive a restart.
    pub fn with_random_secret() -> Self {
        Self::new(SecretBytes::generate(TOKEN_SECRET_LENGTH))
    }

    /// Create config for development (random secret, week-long tokens)
    pub fn development() -> Self {
        Self {
            token_ttl: Duration::from_secs(7 * 24 * 3600),
            ..Self::with_random_secret()
        }
    }

    /// Get token TTL in seconds
    pub fn token_ttl_secs(&self) -> u64 {
        self.token_ttl.as_secs()
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_ref().map(SecretBytes::as_bytes)
    }
}
