//! Data structures for the SagaPay gateway SDK.
//!
//! This crate holds the types shared by the API client, the webhook verifier
//! and the CLI. It performs no I/O.
//!
//! # Module Organization
//!
//! - [`constants`] - Endpoint paths, header names, required field lists
//! - [`enums`] - Transaction type/status and deposit address type
//! - [`error`] - Error codes and the SDK-wide error type
//! - [`event`] - Typed view of a webhook notification
//! - [`params`] - Request parameter map with string coercion
//! - [`requests`] - Typed builders for deposit and withdrawal requests
//! - [`validation`] - Required-field checks for params and JSON payloads
//!
//! # Example
//!
//! ```
//! use sagapay_types::{DepositRequest, Params, constants::DEPOSIT_REQUIRED_PARAMS};
//! use sagapay_types::validation::require_params;
//!
//! let params: Params = DepositRequest::new("BEP20", "0", "0.5", "https://shop.example/ipn")
//!     .with_udf("order-123")
//!     .into();
//!
//! assert!(require_params(&params, DEPOSIT_REQUIRED_PARAMS).is_ok());
//! assert_eq!(params.get_str("udf"), Some("order-123"));
//! ```

/// SDK version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod constants;
pub mod enums;
pub mod error;
pub mod event;
pub mod params;
pub mod requests;
pub mod validation;

pub use enums::{AddressType, TransactionStatus, TransactionType};
pub use error::{ErrorCode, SagaPayError, SagaPayResult};
pub use event::WebhookEvent;
pub use params::{ParamValue, Params};
pub use requests::{DepositRequest, WithdrawalRequest};

/// Decoded JSON object returned by the gateway on success.
pub type ApiResult = serde_json::Map<String, serde_json::Value>;
