//! CLI error types.

use sagapay_types::{ErrorCode, SagaPayError};
use thiserror::Error;

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error enum wrapping all crate errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Gateway or SDK error.
    #[error("{0}")]
    SagaPay(#[from] SagaPayError),

    /// IO error.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// User-facing error with actionable message.
    #[error("{0}")]
    User(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(String),
}

impl CliError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a user-facing error.
    pub fn user(msg: impl Into<String>) -> Self {
        Self::User(msg.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            // User errors: 1
            Self::User(_) => 1,
            // Not found: 2
            Self::FileNotFound(_) => 2,
            // Config errors: 3
            Self::Config(_) | Self::Toml(_) => 3,
            // Gateway errors: 4-8 by kind
            Self::SagaPay(e) => match e.kind() {
                ErrorCode::InvalidParam => 4,
                ErrorCode::NetworkError => 5,
                ErrorCode::ApiError => 6,
                ErrorCode::InvalidResponse => 7,
                ErrorCode::InvalidSignature => 8,
            },
            // IO errors: 9
            Self::Io(_) => 9,
        }
    }

    /// SDK error code, when the failure came from the SDK.
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            Self::SagaPay(e) => Some(e.kind()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::user("x").exit_code(), 1);
        assert_eq!(CliError::config("x").exit_code(), 3);
        assert_eq!(
            CliError::from(SagaPayError::missing_param("amount")).exit_code(),
            4
        );
        assert_eq!(CliError::from(SagaPayError::network("down")).exit_code(), 5);
    }

    #[test]
    fn test_exit_codes_for_local_failures() {
        assert_eq!(CliError::FileNotFound("body.json".into()).exit_code(), 2);
        let toml_err = toml::from_str::<toml::Value>("gateway = [").unwrap_err();
        assert_eq!(CliError::from(toml_err).exit_code(), 3);
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(CliError::from(io_err).exit_code(), 9);
        assert_eq!(
            CliError::from(SagaPayError::invalid_signature("bad")).exit_code(),
            8
        );
    }

    #[test]
    fn test_error_code_only_for_sdk_errors() {
        let err = CliError::from(SagaPayError::invalid_signature("bad"));
        assert_eq!(err.error_code(), Some(ErrorCode::InvalidSignature));
        assert_eq!(CliError::user("x").error_code(), None);
    }

    #[test]
    fn test_display_passes_sdk_message_through() {
        let err = CliError::from(SagaPayError::missing_param("ipnUrl"));
        assert_eq!(err.to_string(), "Missing required parameter: ipnUrl");
    }
}
