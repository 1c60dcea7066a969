//! Auth Router

use std::sync::Arc;

use axum::{Router, routing::post};
use kernel::response::Route;

use crate::application::config::AuthConfig;
use crate::application::validation::{login_chain, sign_up_chain};
use crate::application::{Auth, LoginDto, SignUp, SignUpDto};
use crate::domain::repository::UserRepository;
use crate::domain::service::{Crypto, Token};
use crate::infra::{ArgonCrypto, JwtToken, PgUserRepository};
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::login_router::LoginRouter;
use crate::presentation::sign_up_router::SignUpRouter;

/// Create the Auth router with PostgreSQL repository, Argon2 and JWT
pub fn auth_router(repo: PgUserRepository, config: &AuthConfig) -> Router {
    let crypto = ArgonCrypto::new(config.pepper());
    let token = JwtToken::new(config.token_secret.as_bytes(), config.token_ttl);

    auth_router_generic(repo, crypto, token)
}

/// Create a generic Auth router for any capability implementations
pub fn auth_router_generic<U, C, T>(repo: U, crypto: C, token: T) -> Router
where
    U: UserRepository + Send + Sync + 'static,
    C: Crypto + Send + Sync + 'static,
    T: Token + 'static,
{
    let user_repo = Arc::new(repo);
    let crypto = Arc::new(crypto);
    let token = Arc::new(token);

    let login_chain = Arc::new(login_chain());
    let auth = Auth::new(
        login_chain.clone(),
        user_repo.clone(),
        crypto.clone(),
        token.clone(),
    );

    let sign_up_chain = Arc::new(sign_up_chain());
    let sign_up = SignUp::new(sign_up_chain.clone(), user_repo, crypto, token);

    routes(
        LoginRouter::new(login_chain, Arc::new(auth)),
        SignUpRouter::new(sign_up_chain, Arc::new(sign_up)),
    )
}

/// Mount already-built routers
pub fn routes<L, S>(login: L, sign_up: S) -> Router
where
    L: Route<LoginDto> + Send + Sync + 'static,
    S: Route<SignUpDto> + Send + Sync + 'static,
{
    let state = AuthAppState {
        login: Arc::new(login),
        sign_up: Arc::new(sign_up),
    };

    Router::new()
        .route("/login", post(handlers::login::<L, S>))
        .route("/signup", post(handlers::sign_up::<L, S>))
        .with_state(state)
}
