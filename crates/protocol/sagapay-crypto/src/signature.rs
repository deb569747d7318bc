//! HMAC-SHA256 signature creation and verification
//!
//! Signatures are computed over the exact bytes that travel on the wire:
//! ```text
//! signature = hex(HMAC_SHA256(secret, payload))
//! ```
//!
//! Verification must be given the raw, unparsed body. Re-serializing a parsed
//! JSON document is not byte-stable (key order, whitespace) and would break
//! the digest comparison.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::Signature;

type HmacSha256 = Hmac<Sha256>;

/// Sign a payload with a shared secret.
///
/// # Example
/// ```
/// use sagapay_crypto::sign;
///
/// let signature = sign(b"hello", b"secret");
/// assert_eq!(signature.as_str().len(), 64);
/// assert_eq!(signature, sign(b"hello", b"secret"));
/// ```
pub fn sign(payload: &[u8], secret: &[u8]) -> Signature {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(payload);
    Signature::from_digest(&mac.finalize().into_bytes())
}

/// Verify a hex signature against a payload and shared secret.
///
/// The comparison is constant-time over the hex encodings. Any mismatch,
/// including a length mismatch or non-canonical hex, yields `false`.
///
/// # Example
/// ```
/// use sagapay_crypto::{sign, verify};
///
/// let signature = sign(b"hello", b"secret");
/// assert!(verify(b"hello", signature.as_str(), b"secret"));
/// assert!(!verify(b"hello", signature.as_str(), b"other-secret"));
/// assert!(!verify(b"hello", "not-a-signature", b"secret"));
/// ```
pub fn verify(payload: &[u8], signature: &str, secret: &[u8]) -> bool {
    let expected = sign(payload, secret);
    expected.as_str().as_bytes().ct_eq(signature.as_bytes()).into()
}
