//! Application Error - Unified error type for the application
//!
//! Defines the closed [`AppError`] taxonomy and the [`AppResult<T>`] alias.
//! Validators, use cases and adapters return it; only the router boundary
//! inspects it (see [`crate::response::HttpResponse::from_error`]).

use std::fmt::Display;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

use super::kind::ErrorKind;

/// アプリケーション統一エラー型
///
/// プロジェクト全体で使用する標準エラー型です。
/// 各バリアントはメッセージを一つ持ち、[`ErrorKind`] に対応付けられます。
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::missing_param("username");
/// assert_eq!(err.kind(), ErrorKind::BadRequest);
/// assert_eq!(err.to_string(), "Missing param: username");
///
/// let err = AppError::invalid_param("email must be a valid email");
/// assert_eq!(err.message(), "email must be a valid email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// A required field is absent or empty. Holds the field name.
    #[error("Missing param: {0}")]
    MissingParam(String),

    /// A field is present but breaks a shape/length rule, or credentials do not match.
    #[error("{0}")]
    InvalidParam(String),

    /// Persistence-layer failure, e.g. a duplicate username.
    #[error("{0}")]
    Database(String),

    /// Hash/compare primitive failure.
    #[error("{0}")]
    Crypto(String),

    /// Anything else.
    #[error("{0}")]
    Unexpected(String),
}

/// アプリケーション結果型エイリアス
///
/// `Result<T, AppError>` の省略形です。
///
/// ## Examples
/// ```rust
/// use kernel::error::app_error::{AppError, AppResult};
///
/// fn require(value: &str) -> AppResult<&str> {
///     if value.is_empty() {
///         return Err(AppError::missing_param("value"));
///     }
///     Ok(value)
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    // ========================================================================
    // Convenience constructors
    // ========================================================================

    #[inline]
    pub fn missing_param(field: impl Into<String>) -> Self {
        Self::MissingParam(field.into())
    }

    #[inline]
    pub fn invalid_param(message: impl Into<String>) -> Self {
        Self::InvalidParam(message.into())
    }

    #[inline]
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }

    #[inline]
    pub fn crypto(message: impl Into<String>) -> Self {
        Self::Crypto(message.into())
    }

    #[inline]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// エラー種別を取得
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            AppError::MissingParam(_) | AppError::InvalidParam(_) => ErrorKind::BadRequest,
            AppError::Database(_) | AppError::Crypto(_) | AppError::Unexpected(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// HTTP ステータスコードを取得
    #[inline]
    pub const fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Stable error name, serialized as `error.name` in responses.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            AppError::MissingParam(_) => "MissingParamError",
            AppError::InvalidParam(_) => "InvalidParamError",
            AppError::Database(_) => "DatabaseError",
            AppError::Crypto(_) => "CryptoError",
            AppError::Unexpected(_) => "UnexpectedError",
        }
    }

    /// ユーザー向けメッセージを取得
    #[inline]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// クライアントエラーかどうか
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        self.kind().is_client_error()
    }

    /// サーバーエラーかどうか
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.kind().is_server_error()
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("AppError", 2)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

// ============================================================================
// Result extension traits
// ============================================================================

/// `Result<T, E>` を `AppResult<T>` に変換するための拡張トレイト
pub trait ResultExt<T, E> {
    /// エラーを文字列化し、指定したバリアントでラップ
    ///
    /// ```rust
    /// use kernel::error::app_error::{AppError, ResultExt};
    ///
    /// let parsed: Result<i32, _> = "abc".parse::<i32>();
    /// let err = parsed.map_app_err(AppError::Unexpected).unwrap_err();
    /// assert!(matches!(err, AppError::Unexpected(_)));
    /// ```
    fn map_app_err<F>(self, variant: F) -> AppResult<T>
    where
        F: FnOnce(String) -> AppError;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: Display,
{
    fn map_app_err<F>(self, variant: F) -> AppResult<T>
    where
        F: FnOnce(String) -> AppError,
    {
        self.map_err(|e| variant(e.to_string()))
    }
}
