//! Error types for the SagaPay SDK.
//!
//! This module defines the numeric error codes reported by the SDK and the
//! single error type returned by every fallible operation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for SagaPay operations.
pub type SagaPayResult<T> = Result<T, SagaPayError>;

/// SDK error codes.
///
/// `ApiError` is the default for HTTP-level failures; the gateway may
/// override it with its own code in the `error` field of the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum ErrorCode {
    /// No response was obtained from the gateway
    NetworkError = 1000,
    /// Response body was not a JSON object
    InvalidResponse = 1001,
    /// Gateway reported a failure (HTTP status >= 400)
    ApiError = 1002,
    /// Missing or invalid caller-supplied field
    InvalidParam = 1003,
    /// Webhook authentication failed
    InvalidSignature = 1004,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get a user-friendly suggestion for recovering from this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::NetworkError => Some("Check network connectivity and the configured base URL."),
            Self::InvalidResponse => {
                Some("The gateway returned a non-JSON body. Check the base URL points at the API.")
            }
            Self::ApiError => Some("The gateway rejected the request. Check credentials and parameters."),
            Self::InvalidParam => Some("Provide every required parameter with a non-empty value."),
            Self::InvalidSignature => {
                Some("Make sure the webhook secret matches the API secret and the raw body is used.")
            }
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::NetworkError => write!(f, "NETWORK_ERROR"),
            ErrorCode::InvalidResponse => write!(f, "INVALID_RESPONSE"),
            ErrorCode::ApiError => write!(f, "API_ERROR"),
            ErrorCode::InvalidParam => write!(f, "INVALID_PARAM"),
            ErrorCode::InvalidSignature => write!(f, "INVALID_SIGNATURE"),
        }
    }
}

/// Main error type for all SagaPay operations.
///
/// Every variant is terminal for the operation that raised it; the SDK never
/// retries internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SagaPayError {
    /// Transport failure, no response obtained
    #[error("network error: {0}")]
    Network(String),

    /// Body could not be decoded as a JSON object
    #[error("{reason}")]
    InvalidResponse {
        /// What was wrong with the body
        reason: String,
        /// Raw body, kept for diagnostics
        body: String,
    },

    /// Gateway reported a failure
    #[error("API error (HTTP {http_status}, code {code}): {message}")]
    Api {
        /// Message from the response body, or a generic fallback
        message: String,
        /// Gateway-supplied error code, or `ErrorCode::ApiError`
        code: i64,
        /// HTTP status of the response
        http_status: u16,
    },

    /// Missing or invalid caller-supplied field
    #[error("{0}")]
    InvalidParam(String),

    /// Webhook authentication failure
    #[error("{0}")]
    InvalidSignature(String),
}

impl SagaPayError {
    /// Create a network error.
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create an invalid-response error carrying the raw body.
    pub fn invalid_response(reason: impl Into<String>, body: impl Into<String>) -> Self {
        Self::InvalidResponse {
            reason: reason.into(),
            body: body.into(),
        }
    }

    /// Create an invalid-parameter error.
    pub fn invalid_param(msg: impl Into<String>) -> Self {
        Self::InvalidParam(msg.into())
    }

    /// Create the error raised for a missing or empty required field.
    pub fn missing_param(name: &str) -> Self {
        Self::InvalidParam(format!("Missing required parameter: {}", name))
    }

    /// Create an invalid-signature error.
    pub fn invalid_signature(msg: impl Into<String>) -> Self {
        Self::InvalidSignature(msg.into())
    }

    /// The error kind.
    pub fn kind(&self) -> ErrorCode {
        match self {
            Self::Network(_) => ErrorCode::NetworkError,
            Self::InvalidResponse { .. } => ErrorCode::InvalidResponse,
            Self::Api { .. } => ErrorCode::ApiError,
            Self::InvalidParam(_) => ErrorCode::InvalidParam,
            Self::InvalidSignature(_) => ErrorCode::InvalidSignature,
        }
    }

    /// The numeric code reported to callers.
    ///
    /// Equal to `kind()` except for API errors, which carry the gateway's
    /// own code when it supplied one.
    pub fn code(&self) -> i64 {
        match self {
            Self::Api { code, .. } => *code,
            other => i64::from(other.kind().code()),
        }
    }

    /// The human-readable message without any kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Network(msg) | Self::InvalidParam(msg) | Self::InvalidSignature(msg) => msg,
            Self::InvalidResponse { reason, .. } => reason,
            Self::Api { message, .. } => message,
        }
    }

    /// HTTP status of the originating response, or 0 if the failure did not
    /// come from an HTTP error status.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Api { http_status, .. } => *http_status,
            _ => 0,
        }
    }
}
