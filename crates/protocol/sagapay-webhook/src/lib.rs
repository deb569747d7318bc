//! Webhook (IPN) authentication for the SagaPay gateway.
//!
//! The gateway notifies merchants of transaction state changes by POSTing a
//! JSON document to the `ipnUrl` given at creation time. Each notification
//! carries an `x-sagapay-signature` header holding the hex HMAC-SHA256 of the
//! raw body, keyed by the merchant's API secret.
//!
//! # Verification Flow
//!
//! ```text
//! Received ──► SignatureChecked ──► SchemaChecked ──► Accepted
//!    │               │                    │
//!    └───────────────┴────────────────────┴──────────► Rejected
//! ```
//!
//! 1. The signature header must be present and non-empty.
//! 2. The body must parse as a JSON object.
//! 3. The signature must match the raw body bytes.
//! 4. `id, type, status, address, networkType, amount, timestamp` must be
//!    present and non-empty.
//!
//! # Responding
//!
//! The endpoint must always answer HTTP 200, even when verification fails,
//! so that the gateway does not keep retrying a notification the merchant
//! cannot process. [`WebhookResponse`] builds both envelopes.
//!
//! # Example
//!
//! ```
//! use sagapay_crypto::sign;
//! use sagapay_webhook::{WebhookResponse, WebhookVerifier};
//!
//! let verifier = WebhookVerifier::new("api-secret");
//! let body = br#"{"id":"1","type":"deposit","status":"COMPLETED","address":"0xabc","networkType":"ERC20","amount":"10","timestamp":"2025-01-01T00:00:00Z"}"#;
//! let signature = sign(body, b"api-secret");
//!
//! let headers = [("X-SagaPay-Signature", signature.as_str())];
//! let response = match verifier.process_headers(headers, body) {
//!     Ok(payload) => {
//!         assert_eq!(payload.get_str("status"), Some("COMPLETED"));
//!         WebhookResponse::success()
//!     }
//!     Err(e) => WebhookResponse::from(&e),
//! };
//! assert_eq!(response.status(), 200);
//! assert_eq!(response.to_json(), r#"{"received":true}"#);
//! ```

pub mod response;
pub mod verifier;

pub use response::WebhookResponse;
pub use verifier::{signature_from_headers, WebhookPayload, WebhookVerifier};
