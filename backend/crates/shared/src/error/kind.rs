//! Error Kind
//!
//! ルーター境界で使うエラー分類。呼び出し側の誤り (400) と
//! サーバー側の失敗 (500) の二つだけを区別します。

use std::fmt;

/// Which side of the request is at fault
///
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// assert_eq!(ErrorKind::BadRequest.status_code(), 400);
/// assert!(ErrorKind::BadRequest.is_client_error());
/// assert_eq!(ErrorKind::InternalServerError.to_string(), "500 Internal Server Error");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 入力の欠落・不正。エラー内容はそのまま返す
    BadRequest,
    /// それ以外すべて。詳細はログのみに残す
    InternalServerError,
}

impl ErrorKind {
    pub const fn status_code(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::InternalServerError => 500,
        }
    }

    /// Reason phrase of [`ErrorKind::status_code`]
    pub const fn reason(self) -> &'static str {
        match self {
            Self::BadRequest => "Bad Request",
            Self::InternalServerError => "Internal Server Error",
        }
    }

    /// The error itself may be put in the response body
    pub const fn is_client_error(self) -> bool {
        matches!(self, Self::BadRequest)
    }

    pub const fn is_server_error(self) -> bool {
        matches!(self, Self::InternalServerError)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status_code(), self.reason())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_and_server_are_disjoint() {
        assert!(ErrorKind::BadRequest.is_client_error());
        assert!(!ErrorKind::BadRequest.is_server_error());
        assert!(!ErrorKind::InternalServerError.is_client_error());
        assert!(ErrorKind::InternalServerError.is_server_error());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorKind::BadRequest.to_string(), "400 Bad Request");
    }
}
