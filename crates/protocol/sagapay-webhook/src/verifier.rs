//! Webhook verification.
//!
//! `WebhookVerifier` is stateless apart from the shared secret; it can be
//! cloned freely and used from many request handlers at once.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use sagapay_crypto::{verify, SecretKey};
use sagapay_types::constants::{HEADER_SIGNATURE, WEBHOOK_REQUIRED_FIELDS};
use sagapay_types::validation::require_fields;
use sagapay_types::{SagaPayError, SagaPayResult, WebhookEvent};

use crate::response::WebhookResponse;

/// Find the signature header in a list of `(name, value)` pairs.
///
/// Header names are compared case-insensitively.
pub fn signature_from_headers<I, K, V>(headers: I) -> Option<String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    headers
        .into_iter()
        .find(|(name, _)| name.as_ref().eq_ignore_ascii_case(HEADER_SIGNATURE))
        .map(|(_, value)| value.as_ref().to_string())
}

/// A notification that passed signature and schema checks.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WebhookPayload(Map<String, Value>);

impl WebhookPayload {
    /// Get a field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Get a string field.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// The underlying JSON object.
    pub fn as_object(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Take the underlying JSON object.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    /// Strongly-typed view of the notification.
    pub fn event(&self) -> SagaPayResult<WebhookEvent> {
        WebhookEvent::from_object(&self.0)
    }
}

/// Authenticates inbound webhook notifications.
#[derive(Clone)]
pub struct WebhookVerifier {
    secret: Arc<SecretKey>,
}

impl WebhookVerifier {
    /// Create a verifier keyed by the merchant's API secret.
    pub fn new(secret: impl Into<SecretKey>) -> Self {
        Self {
            secret: Arc::new(secret.into()),
        }
    }

    /// Create a verifier sharing an existing secret.
    pub fn from_shared(secret: Arc<SecretKey>) -> Self {
        Self { secret }
    }

    /// Verify a notification given its request headers and raw body.
    pub fn process_headers<I, K, V>(&self, headers: I, body: &[u8]) -> SagaPayResult<WebhookPayload>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let signature = signature_from_headers(headers);
        self.process(signature.as_deref(), body)
    }

    /// Verify a notification given its signature header value and raw body.
    ///
    /// `body` must be the bytes exactly as received. Each step short-circuits
    /// to an error:
    /// - missing or empty signature → `InvalidSignature`
    /// - body not a JSON object → `InvalidResponse`
    /// - signature mismatch → `InvalidSignature`
    /// - required field missing or empty → `InvalidParam`
    pub fn process(&self, signature: Option<&str>, body: &[u8]) -> SagaPayResult<WebhookPayload> {
        let signature = match signature {
            Some(s) if !s.is_empty() => s,
            _ => {
                warn!("Webhook rejected: missing signature header");
                return Err(SagaPayError::invalid_signature(
                    "Missing SagaPay signature in headers",
                ));
            }
        };

        let object = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(object)) => object,
            _ => {
                warn!(len = body.len(), "Webhook rejected: body is not a JSON object");
                return Err(SagaPayError::invalid_response(
                    "Invalid JSON in webhook payload",
                    String::from_utf8_lossy(body),
                ));
            }
        };

        // Always against the raw bytes, never a re-serialization of `object`.
        if !verify(body, signature, self.secret.as_bytes()) {
            warn!("Webhook rejected: signature mismatch");
            return Err(SagaPayError::invalid_signature("Invalid webhook signature"));
        }
        debug!("Webhook signature verified");

        if let Err(e) = require_fields(&object, WEBHOOK_REQUIRED_FIELDS) {
            warn!(reason = %e, "Webhook rejected: incomplete payload");
            return Err(e);
        }

        info!(
            id = ?object.get("id"),
            kind = ?object.get("type"),
            status = ?object.get("status"),
            "Webhook accepted"
        );

        Ok(WebhookPayload(object))
    }

    /// Acknowledge a processed notification.
    pub fn success_response(&self, extra: Map<String, Value>) -> WebhookResponse {
        WebhookResponse::success_with(extra)
    }

    /// Reject a notification without triggering gateway retries.
    pub fn error_response(&self, message: &str, code: i64) -> WebhookResponse {
        WebhookResponse::error(message, code)
    }
}

impl std::fmt::Debug for WebhookVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookVerifier")
            .field("secret", &self.secret)
            .finish()
    }
}
