//! Error types for sagapay-crypto

use thiserror::Error;

/// Errors that can occur when handling signatures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Signature has the wrong number of hex characters
    #[error("Invalid signature length: expected {expected} hex chars, got {actual}")]
    InvalidSignatureLength { expected: usize, actual: usize },

    /// Signature contains characters outside lowercase hex
    #[error("Invalid hex encoding: {0}")]
    InvalidHex(String),
}
