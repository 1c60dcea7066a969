//! Server configuration
//!
//! Read once at startup from the environment (after `.env` is loaded).

use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::time::Duration;

use anyhow::{Context, ensure};
use auth::AuthConfig;
use auth::application::config::TOKEN_SECRET_LENGTH;
use platform::secret::SecretBytes;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), cfg!(debug_assertions))
    }

    /// `development` allows a missing `TOKEN_SECRET` (a random one is generated)
    pub fn from_lookup<F>(lookup: F, development: bool) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value
                .parse::<NonZeroU32>()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?
                .get(),
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be a socket address")?;

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let mut auth = match lookup("TOKEN_SECRET") {
            Some(secret_b64) => {
                let token_secret =
                    SecretBytes::from_base64(&secret_b64).context("TOKEN_SECRET must be base64")?;
                ensure!(
                    token_secret.len() >= TOKEN_SECRET_LENGTH,
                    "TOKEN_SECRET must decode to at least {TOKEN_SECRET_LENGTH} bytes"
                );
                AuthConfig::new(token_secret)
            }
            None if development => {
                tracing::warn!("TOKEN_SECRET not set, using a random secret");
                AuthConfig::with_random_secret()
            }
            None => anyhow::bail!("TOKEN_SECRET must be set in production"),
        };

        if let Some(ttl) = lookup("TOKEN_TTL_SECS") {
            let secs: u64 = ttl.parse().context("TOKEN_TTL_SECS must be a number of seconds")?;
            auth.token_ttl = Duration::from_secs(secs);
        }

        if let Some(pepper_b64) = lookup("PASSWORD_PEPPER") {
            auth.password_pepper =
                Some(SecretBytes::from_base64(&pepper_b64).context("PASSWORD_PEPPER must be base64")?);
        }

        Ok(Self {
            database_url,
            database_max_connections,
            bind_addr,
            frontend_origins,
            auth,
        })
    }
}
