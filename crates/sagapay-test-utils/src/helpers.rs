//! Helper functions for creating test fixtures.
//!
//! Provides canned credentials, a client wired to a [`MockTransport`], and
//! a signed sample webhook notification.

use std::sync::Arc;

use sagapay_client::{ApiClient, ClientConfig};
use sagapay_crypto::sign;
use sagapay_types::constants::HEADER_SIGNATURE;

use crate::MockTransport;

/// API key used by test clients.
pub const TEST_API_KEY: &str = "test-api-key";

/// API secret used by test clients and to sign sample webhooks.
pub const TEST_API_SECRET: &str = "test-api-secret";

/// Base URL used by test clients.
pub const TEST_BASE_URL: &str = "https://sandbox.sagapay.test";

/// Config pointing at [`TEST_BASE_URL`] with the test credentials.
pub fn test_config() -> ClientConfig {
    ClientConfig::new(TEST_API_KEY, TEST_API_SECRET).with_base_url(TEST_BASE_URL)
}

/// Create a client sending through `transport`.
///
/// The returned client and the caller's `transport` share state, so the
/// caller can assert on recorded requests afterwards.
pub fn test_client(transport: &MockTransport) -> ApiClient {
    ApiClient::with_transport(test_config(), Arc::new(transport.clone()))
        .expect("test config is valid")
}

/// A complete deposit notification as the gateway sends it.
pub fn sample_webhook_json() -> serde_json::Value {
    serde_json::json!({
        "id": "1",
        "type": "deposit",
        "status": "COMPLETED",
        "address": "0xabc",
        "networkType": "ERC20",
        "amount": "10",
        "timestamp": "2025-01-01T00:00:00Z"
    })
}

/// Raw bytes of [`sample_webhook_json`].
pub fn sample_webhook_body() -> Vec<u8> {
    sample_webhook_json().to_string().into_bytes()
}

/// Request headers carrying the signature of `body` under `secret`.
pub fn signed_webhook_headers(body: &[u8], secret: &[u8]) -> Vec<(String, String)> {
    vec![
        ("Content-Type".to_string(), "application/json".to_string()),
        (HEADER_SIGNATURE.to_string(), sign(body, secret).to_string()),
    ]
}
