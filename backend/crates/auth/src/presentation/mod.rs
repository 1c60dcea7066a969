//! Presentation Layer
//!
//! Routers, HTTP handlers, DTOs and the axum router.

pub mod dto;
pub mod handlers;
pub mod login_router;
pub mod router;
pub mod sign_up_router;

pub use handlers::AuthAppState;
pub use login_router::LoginRouter;
pub use router::{auth_router, auth_router_generic, routes};
pub use sign_up_router::SignUpRouter;
