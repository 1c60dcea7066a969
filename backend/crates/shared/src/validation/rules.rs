//! Field rules
//!
//! Concrete [`ChainHandler`]s for the request fields the services accept.
//! Lengths are counted in characters, not bytes.

use std::sync::OnceLock;

use regex::Regex;

use super::ChainHandler;
use crate::error::app_error::{AppError, AppResult};

// ============================================================================
// Constants
// ============================================================================

/// Minimum length for user name (in characters)
pub const USERNAME_MIN_LENGTH: usize = 3;

/// Maximum length for user name (in characters)
pub const USERNAME_MAX_LENGTH: usize = 24;

/// Minimum password length
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Maximum portfolio name length
pub const PORTFOLIO_NAME_MAX_LENGTH: usize = 50;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // local part (dotted atoms or a quoted string) @ (IPv4 literal | dotted labels + alpha TLD)
        let pattern = r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#;
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

// ============================================================================
// Validators
// ============================================================================

/// `username`: 3 to 24 characters
#[derive(Debug, Clone, Copy, Default)]
pub struct UsernameValidator;

impl ChainHandler for UsernameValidator {
    fn key(&self) -> &'static str {
        "username"
    }

    fn check(&self, value: &str) -> AppResult<()> {
        let length = value.chars().count();
        if length < USERNAME_MIN_LENGTH {
            return Err(AppError::invalid_param(format!(
                "username must be at least {} characters long",
                USERNAME_MIN_LENGTH
            )));
        }
        if length > USERNAME_MAX_LENGTH {
            return Err(AppError::invalid_param(format!(
                "username must be at most {} characters long",
                USERNAME_MAX_LENGTH
            )));
        }
        Ok(())
    }
}

/// `password`: at least 8 characters
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordValidator;

impl ChainHandler for PasswordValidator {
    fn key(&self) -> &'static str {
        "password"
    }

    fn check(&self, value: &str) -> AppResult<()> {
        if value.chars().count() < PASSWORD_MIN_LENGTH {
            return Err(AppError::invalid_param(format!(
                "password must be at least {} characters long",
                PASSWORD_MIN_LENGTH
            )));
        }
        Ok(())
    }
}

/// `email`: must look like an address
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

impl ChainHandler for EmailValidator {
    fn key(&self) -> &'static str {
        "email"
    }

    fn check(&self, value: &str) -> AppResult<()> {
        if !email_regex().is_match(value) {
            return Err(AppError::invalid_param("email must be a valid email"));
        }
        Ok(())
    }
}

/// `name` of a portfolio: at most 50 characters
#[derive(Debug, Clone, Copy, Default)]
pub struct PortfolioNameValidator;

impl ChainHandler for PortfolioNameValidator {
    fn key(&self) -> &'static str {
        "name"
    }

    fn check(&self, value: &str) -> AppResult<()> {
        if value.chars().count() > PORTFOLIO_NAME_MAX_LENGTH {
            return Err(AppError::invalid_param(format!(
                "name must be at most {} characters long",
                PORTFOLIO_NAME_MAX_LENGTH
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
