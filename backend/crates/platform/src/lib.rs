//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Secret key material (random generation, base64 configuration)
//! - Password hashing (Argon2id)
//! - Access token signing (HS256 JWT)

pub mod password;
pub mod secret;
pub mod token;
