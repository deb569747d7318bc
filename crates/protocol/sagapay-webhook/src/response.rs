//! Webhook acknowledgement envelopes.
//!
//! Both envelopes use HTTP 200. A non-2xx answer would make the gateway
//! retry a notification the merchant has already decided it cannot accept.

use serde::Serialize;
use serde_json::{Map, Value};

use sagapay_types::SagaPayError;

/// HTTP status used for every webhook answer.
pub const WEBHOOK_RESPONSE_STATUS: u16 = 200;

/// Body and status to send back to the gateway.
///
/// Serializes as the body object alone.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WebhookResponse {
    body: Map<String, Value>,
}

impl WebhookResponse {
    /// `{"received": true}`
    pub fn success() -> Self {
        Self::success_with(Map::new())
    }

    /// `{"received": true, ...extra}`
    ///
    /// Keys in `extra` are merged after `received` and win on conflict.
    pub fn success_with(extra: Map<String, Value>) -> Self {
        let mut body = Map::new();
        body.insert("received".to_string(), Value::Bool(true));
        for (key, value) in extra {
            body.insert(key, value);
        }
        Self { body }
    }

    /// `{"received": false, "error": message, "code": code}`
    pub fn error(message: &str, code: i64) -> Self {
        let mut body = Map::new();
        body.insert("received".to_string(), Value::Bool(false));
        body.insert("error".to_string(), Value::String(message.to_string()));
        body.insert("code".to_string(), Value::from(code));
        Self { body }
    }

    /// HTTP status to answer with. Always 200.
    pub fn status(&self) -> u16 {
        WEBHOOK_RESPONSE_STATUS
    }

    /// Response body.
    pub fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    /// Whether this acknowledges the notification.
    pub fn is_received(&self) -> bool {
        self.body
            .get("received")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Serialized JSON body.
    pub fn to_json(&self) -> String {
        Value::Object(self.body.clone()).to_string()
    }
}

impl From<&SagaPayError> for WebhookResponse {
    fn from(err: &SagaPayError) -> Self {
        Self::error(err.message(), err.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_body() {
        let response = WebhookResponse::success();
        assert_eq!(response.status(), 200);
        assert!(response.is_received());
        assert_eq!(response.to_json(), r#"{"received":true}"#);
    }

    #[test]
    fn test_success_with_extra() {
        let extra = json!({"orderId": "order-123"}).as_object().cloned().unwrap();
        let response = WebhookResponse::success_with(extra);
        assert_eq!(response.to_json(), r#"{"received":true,"orderId":"order-123"}"#);
    }

    #[test]
    fn test_success_extra_overrides_received() {
        let extra = json!({"received": "later"}).as_object().cloned().unwrap();
        let response = WebhookResponse::success_with(extra);
        assert_eq!(response.body().get("received"), Some(&json!("later")));
        assert!(!response.is_received());
    }

    #[test]
    fn test_error_body_exact() {
        let response = WebhookResponse::error("bad sig", 1004);
        assert_eq!(response.status(), 200);
        assert!(!response.is_received());
        assert_eq!(
            response.to_json(),
            r#"{"received":false,"error":"bad sig","code":1004}"#
        );
    }

    #[test]
    fn test_serializes_as_body() {
        let response = WebhookResponse::error("bad sig", 1004);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"received": false, "error": "bad sig", "code": 1004})
        );
        assert_eq!(serde_json::to_string(&response).unwrap(), response.to_json());
    }

    #[test]
    fn test_from_error_uses_message_and_code() {
        let err = SagaPayError::invalid_signature("Invalid webhook signature");
        let response = WebhookResponse::from(&err);
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.body(),
            json!({"received": false, "error": "Invalid webhook signature", "code": 1004})
                .as_object()
                .unwrap()
        );
    }
}
