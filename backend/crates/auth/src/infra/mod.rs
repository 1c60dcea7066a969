//! Infrastructure Layer
//!
//! Database implementations and external service integrations.

pub mod argon;
pub mod jwt;
pub mod postgres;

pub use argon::ArgonCrypto;
pub use jwt::JwtToken;
pub use postgres::PgUserRepository;
