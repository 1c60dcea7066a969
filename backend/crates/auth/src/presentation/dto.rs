//! API DTOs (Data Transfer Objects)
//!
//! Request bodies are the application layer's [`LoginDto`] and
//! [`SignUpDto`]; only response shapes live here.
//!
//! [`LoginDto`]: crate::application::login::LoginDto
//! [`SignUpDto`]: crate::application::sign_up::SignUpDto

use serde::Serialize;

/// `data` of a successful login or sign up
///
/// `accessToken` is `null` when the login named an unknown user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponse {
    pub access_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_camel_case_and_null() {
        let json = serde_json::to_value(AccessTokenResponse {
            access_token: Some("jwt".to_string()),
        })
        .unwrap();
        assert_eq!(json, json!({ "accessToken": "jwt" }));

        let json = serde_json::to_value(AccessTokenResponse { access_token: None }).unwrap();
        assert_eq!(json, json!({ "accessToken": null }));
    }
}
