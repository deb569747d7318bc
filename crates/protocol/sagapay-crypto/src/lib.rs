//! Signing primitives for the SagaPay gateway.
//!
//! SagaPay authenticates webhook notifications with an HMAC-SHA256 digest of
//! the raw request body, keyed by the merchant's API secret and sent as a
//! lowercase hex string:
//!
//! ```text
//! x-sagapay-signature = hex(HMAC_SHA256(api_secret, raw_body))
//! ```
//!
//! # Example
//!
//! ```
//! use sagapay_crypto::{sign, verify, SecretKey};
//!
//! let secret = SecretKey::new("your-api-secret");
//! let body = br#"{"id":"1","status":"COMPLETED"}"#;
//!
//! let signature = sign(body, secret.as_bytes());
//! assert!(verify(body, signature.as_str(), secret.as_bytes()));
//! assert!(!verify(b"tampered", signature.as_str(), secret.as_bytes()));
//! ```

mod error;
mod signature;

pub use error::CryptoError;
pub use signature::{sign, verify};

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Length of an HMAC-SHA256 digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// Length of a hex-encoded signature.
pub const SIGNATURE_HEX_LEN: usize = DIGEST_LEN * 2;

/// Shared secret used both as the `x-api-secret` credential and as the
/// HMAC key for webhook signatures.
///
/// Implements Zeroize + ZeroizeOnDrop to clear key material from memory.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey(Vec<u8>);

impl SecretKey {
    /// Create a secret from anything byte-like.
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self(secret.as_ref().to_vec())
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The secret as a header value.
    ///
    /// Returns `None` if the secret is not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    /// Whether the secret is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for SecretKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SecretKey {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretKey([REDACTED])")
    }
}

/// A lowercase hex HMAC-SHA256 signature.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Signature(String);

impl Signature {
    /// Parse a signature from its hex form.
    ///
    /// Only the canonical encoding is accepted: exactly 64 lowercase hex
    /// characters.
    pub fn from_hex(s: &str) -> Result<Self, CryptoError> {
        if s.len() != SIGNATURE_HEX_LEN {
            return Err(CryptoError::InvalidSignatureLength {
                expected: SIGNATURE_HEX_LEN,
                actual: s.len(),
            });
        }
        if !s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return Err(CryptoError::InvalidHex(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    /// Hex string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn from_digest(digest: &[u8]) -> Self {
        Self(hex::encode(digest))
    }
}

impl std::fmt::Debug for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Signature({}...)", &self.0[..self.0.len().min(16)])
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Signature {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Signature {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_debug_redacted() {
        let secret = SecretKey::new("super-secret-value");
        let debug = format!("{:?}", secret);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_secret_implements_zeroize() {
        let mut secret = SecretKey::new("abc");
        secret.zeroize();
        assert!(secret.is_empty());
    }

    #[test]
    fn test_secret_as_str() {
        assert_eq!(SecretKey::new("abc").as_str(), Some("abc"));
        assert_eq!(SecretKey::new([0xffu8, 0xfe]).as_str(), None);
    }

    #[test]
    fn test_signature_from_hex_accepts_canonical() {
        let hex = "a".repeat(64);
        let sig = Signature::from_hex(&hex).unwrap();
        assert_eq!(sig.as_str(), hex);
        assert_eq!(hex.parse::<Signature>().unwrap(), sig);
    }

    #[test]
    fn test_signature_from_hex_rejects_bad_length() {
        let err = Signature::from_hex("abcd").unwrap_err();
        assert_eq!(
            err,
            CryptoError::InvalidSignatureLength {
                expected: 64,
                actual: 4
            }
        );
    }

    #[test]
    fn test_signature_from_hex_rejects_uppercase() {
        let hex = "A".repeat(64);
        assert!(matches!(
            Signature::from_hex(&hex),
            Err(CryptoError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_signature_display_is_hex() {
        let sig = sign(b"payload", b"secret");
        assert_eq!(format!("{}", sig).len(), SIGNATURE_HEX_LEN);
    }
}
