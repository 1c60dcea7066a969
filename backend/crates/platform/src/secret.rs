//! Secret Key Material
//!
//! Token secrets and password peppers: generated from the OS RNG or read
//! from base64 configuration, wiped from memory on drop.

use std::fmt;

use base64::{Engine, engine::general_purpose};
use rand::{RngCore, rngs::OsRng};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret bytes with redacted `Debug` and zeroization on drop
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretBytes(Vec<u8>);

impl SecretBytes {
    /// `len` bytes from the OS RNG
    pub fn generate(len: usize) -> Self {
        let mut bytes = vec![0u8; len];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Decode standard base64; surrounding whitespace is ignored
    pub fn from_base64(encoded: &str) -> Result<Self, base64::DecodeError> {
        general_purpose::STANDARD.decode(encoded.trim()).map(Self)
    }

    pub fn to_base64(&self) -> String {
        general_purpose::STANDARD.encode(&self.0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for SecretBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for SecretBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBytes([REDACTED; {}])", self.0.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate() {
        let secret = SecretBytes::generate(32);
        assert_eq!(secret.len(), 32);
        assert!(secret.as_bytes().iter().any(|&b| b != 0));
        assert_ne!(secret, SecretBytes::generate(32));
        assert!(SecretBytes::generate(0).is_empty());
    }

    #[test]
    fn test_base64() {
        let secret = SecretBytes::from_base64(" aGk=\n").unwrap();
        assert_eq!(secret.as_bytes(), b"hi");
        assert_eq!(secret.to_base64(), "aGk=");
        assert!(SecretBytes::from_base64("not base64!").is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let secret = SecretBytes::from(b"pepper".to_vec());
        let debug = format!("{:?}", secret);
        assert_eq!(debug, "SecretBytes([REDACTED; 6])");
    }
}
