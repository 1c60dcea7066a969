//! Validator chain
//!
//! A request is validated by an ordered list of single-field handlers.
//! Each handler checks its own field and hands over to the next one; the
//! first failure aborts the whole pipeline (fail-fast, no aggregation).
//! A chain with no more handlers returns `Ok(())`.
//!
//! ```rust
//! use kernel::validation::{ValidatorChain, rules::{PasswordValidator, UsernameValidator}};
//! use serde_json::json;
//!
//! let chain = ValidatorChain::new()
//!     .set_next(UsernameValidator)
//!     .set_next(PasswordValidator);
//!
//! assert!(chain.handle(&json!({ "username": "alice", "password": "hunter22" })).is_ok());
//! assert!(chain.handle(&json!({ "username": "", "password": "hunter22" })).is_err());
//! ```

pub mod rules;

use std::collections::HashMap;
use std::fmt;

use serde_json::{Map, Value};

use crate::error::app_error::{AppError, AppResult};
use crate::error::conversions::INVALID_BODY_MESSAGE;

/// Untyped key-value view over a request.
pub trait Fields {
    /// String value stored under `key`, if any
    fn field(&self, key: &str) -> Option<&str>;
}

impl Fields for Map<String, Value> {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }
}

impl Fields for Value {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }
}

impl<S: std::hash::BuildHasher> Fields for HashMap<String, String, S> {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl<T: Fields + ?Sized> Fields for &T {
    fn field(&self, key: &str) -> Option<&str> {
        (**self).field(key)
    }
}

/// Request body that parsed as a JSON object.
///
/// Any other JSON value (array, string, `null`, ...) is rejected with
/// `InvalidParam`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonBody(Map<String, Value>);

impl JsonBody {
    /// String stored under `key`; absent, `null` and non-string values read as `""`
    pub fn text(&self, key: &str) -> String {
        self.field(key).unwrap_or_default().to_string()
    }
}

impl TryFrom<Value> for JsonBody {
    type Error = AppError;

    fn try_from(value: Value) -> AppResult<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(AppError::invalid_param(INVALID_BODY_MESSAGE)),
        }
    }
}

impl Fields for JsonBody {
    fn field(&self, key: &str) -> Option<&str> {
        self.0.field(key)
    }
}

/// A single-responsibility validator for one field.
pub trait ChainHandler: Send + Sync {
    /// Name of the inspected field
    fn key(&self) -> &'static str;

    /// Rules for a present, non-empty value
    fn check(&self, value: &str) -> AppResult<()>;

    /// Absent or empty → `MissingParam(key)`, otherwise [`ChainHandler::check`].
    fn validate(&self, input: &dyn Fields) -> AppResult<()> {
        match input.field(self.key()) {
            Some(value) if !value.is_empty() => self.check(value),
            _ => Err(AppError::missing_param(self.key())),
        }
    }
}

/// Ordered pipeline of [`ChainHandler`]s.
///
/// Built once at wiring time and shared read-only between requests.
#[derive(Default)]
pub struct ValidatorChain {
    handlers: Vec<Box<dyn ChainHandler>>,
}

impl ValidatorChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `handler` as the successor of the current last handler.
    pub fn set_next<H>(mut self, handler: H) -> Self
    where
        H: ChainHandler + 'static,
    {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Run every handler in order, stopping at the first failure.
    pub fn handle<F>(&self, input: &F) -> AppResult<()>
    where
        F: Fields,
    {
        self.handlers
            .iter()
            .try_for_each(|handler| handler.validate(input))
    }

    /// Inspected field names, in order
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.iter().map(|handler| handler.key())
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for ValidatorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::rules::{EmailValidator, PasswordValidator, UsernameValidator};
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn sign_up_chain() -> ValidatorChain {
        ValidatorChain::new()
            .set_next(UsernameValidator)
            .set_next(PasswordValidator)
            .set_next(EmailValidator)
    }

    /// Counts how often it is reached
    struct HitCounter(Arc<AtomicUsize>);

    impl ChainHandler for HitCounter {
        fn key(&self) -> &'static str {
            "counter"
        }

        fn check(&self, _value: &str) -> AppResult<()> {
            Ok(())
        }

        fn validate(&self, _input: &dyn Fields) -> AppResult<()> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_empty_chain_passes() {
        let chain = ValidatorChain::new();
        assert!(chain.is_empty());
        assert!(chain.handle(&json!({})).is_ok());
    }

    #[test]
    fn test_valid_input_passes() {
        let input = json!({
            "username": "valid_username",
            "password": "valid_password",
            "email": "valid_email@mail.com"
        });
        assert!(sign_up_chain().handle(&input).is_ok());
    }

    #[test]
    fn test_handle_is_repeatable() {
        let chain = sign_up_chain();
        let input = json!({
            "username": "valid_username",
            "password": "valid_password",
            "email": "valid_email@mail.com"
        });
        assert!(chain.handle(&input).is_ok());
        assert!(chain.handle(&input).is_ok());
    }

    #[test]
    fn test_first_failure_wins() {
        let input = json!({ "username": "ab", "password": "", "email": "nope" });
        assert_eq!(
            sign_up_chain().handle(&input),
            Err(AppError::invalid_param(
                "username must be at least 3 characters long"
            ))
        );
    }

    #[test]
    fn test_order_decides_reported_error() {
        let chain = ValidatorChain::new()
            .set_next(EmailValidator)
            .set_next(UsernameValidator);
        let input = json!({ "username": "", "email": "" });
        assert_eq!(chain.handle(&input), Err(AppError::missing_param("email")));
    }

    #[test]
    fn test_failure_stops_successors() {
        let hits = Arc::new(AtomicUsize::new(0));
        let chain = ValidatorChain::new()
            .set_next(UsernameValidator)
            .set_next(HitCounter(hits.clone()));

        assert!(chain.handle(&json!({ "username": "" })).is_err());
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        assert!(chain.handle(&json!({ "username": "alice" })).is_ok());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_absent_and_non_string_fields_are_missing() {
        let chain = ValidatorChain::new().set_next(UsernameValidator);
        assert_eq!(
            chain.handle(&json!({})),
            Err(AppError::missing_param("username"))
        );
        assert_eq!(
            chain.handle(&json!({ "username": 42 })),
            Err(AppError::missing_param("username"))
        );
    }

    #[test]
    fn test_hash_map_fields() {
        let mut input = HashMap::new();
        input.insert("username".to_string(), "alice".to_string());
        input.insert("password".to_string(), "short".to_string());

        let chain = ValidatorChain::new()
            .set_next(UsernameValidator)
            .set_next(PasswordValidator);
        assert_eq!(
            chain.handle(&input),
            Err(AppError::invalid_param(
                "password must be at least 8 characters long"
            ))
        );
    }

    #[test]
    fn test_json_body_accepts_objects_only() {
        let body = JsonBody::try_from(json!({ "username": "alice" })).unwrap();
        assert_eq!(body.text("username"), "alice");

        for value in [json!(["alice", "hunter22"]), json!("alice"), json!(null), json!(1)] {
            assert_eq!(
                JsonBody::try_from(value),
                Err(AppError::invalid_param(INVALID_BODY_MESSAGE))
            );
        }
    }

    #[test]
    fn test_json_body_null_reads_as_missing() {
        let body = JsonBody::try_from(json!({ "username": null, "password": 12345678 })).unwrap();
        assert_eq!(body.text("username"), "");
        assert_eq!(body.text("password"), "");
        assert_eq!(body.text("email"), "");

        let chain = ValidatorChain::new().set_next(UsernameValidator);
        assert_eq!(chain.handle(&body), Err(AppError::missing_param("username")));
    }

    #[test]
    fn test_keys_and_debug() {
        let chain = sign_up_chain();
        assert_eq!(chain.len(), 3);
        assert_eq!(
            chain.keys().collect::<Vec<_>>(),
            vec!["username", "password", "email"]
        );
        assert_eq!(format!("{:?}", chain), r#"["username", "password", "email"]"#);
    }
}
