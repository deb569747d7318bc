//! Typed view of a webhook notification.
//!
//! The verifier hands back the raw JSON object; [`WebhookEvent`] is the
//! strongly-typed projection business code usually wants. Fields the SDK
//! does not know about are kept in `extra`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::enums::{TransactionStatus, TransactionType};
use crate::error::{SagaPayError, SagaPayResult};

/// A transaction state change reported by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEvent {
    /// Gateway transaction ID.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    /// Deposit or withdrawal.
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// New status.
    pub status: TransactionStatus,

    /// Blockchain address involved.
    pub address: String,

    /// Network identifier.
    pub network_type: String,

    /// Amount as reported (decimal string).
    #[serde(deserialize_with = "string_or_number")]
    pub amount: String,

    /// Event time as reported.
    #[serde(deserialize_with = "string_or_number")]
    pub timestamp: String,

    /// Caller reference supplied at creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udf: Option<String>,

    /// On-chain transaction hash, once known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,

    /// Any additional fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WebhookEvent {
    /// Build from a verified payload object.
    pub fn from_object(object: &Map<String, Value>) -> SagaPayResult<Self> {
        serde_json::from_value(Value::Object(object.clone())).map_err(|e| {
            SagaPayError::invalid_param(format!("Malformed webhook payload: {}", e))
        })
    }

    /// Parse `timestamp` as RFC 3339.
    ///
    /// Returns `None` if the gateway sent a format other than RFC 3339.
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Whether this is the last notification for the transaction.
    pub fn is_final(&self) -> bool {
        self.status.is_final()
    }
}

/// Accept either a JSON string or a JSON number and keep its text form.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use chrono::Datelike;
    use serde_json::json;

    fn sample() -> Map<String, Value> {
        json!({
            "id": "1",
            "type": "deposit",
            "status": "COMPLETED",
            "address": "0xabc",
            "networkType": "ERC20",
            "amount": "10",
            "timestamp": "2025-01-01T00:00:00Z",
            "udf": "order-123",
            "txHash": "0xdeadbeef",
            "confirmations": 12
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    #[test]
    fn test_event_from_object() {
        let event = WebhookEvent::from_object(&sample()).unwrap();
        assert_eq!(event.id, "1");
        assert_eq!(event.kind, TransactionType::Deposit);
        assert_eq!(event.status, TransactionStatus::Completed);
        assert_eq!(event.network_type, "ERC20");
        assert_eq!(event.udf.as_deref(), Some("order-123"));
        assert_eq!(event.tx_hash.as_deref(), Some("0xdeadbeef"));
        assert_eq!(event.extra.get("confirmations"), Some(&json!(12)));
        assert!(event.is_final());
    }

    #[test]
    fn test_event_numeric_fields() {
        let mut object = sample();
        object.insert("id".into(), json!(42));
        object.insert("amount".into(), json!(10.5));
        let event = WebhookEvent::from_object(&object).unwrap();
        assert_eq!(event.id, "42");
        assert_eq!(event.amount, "10.5");
    }

    #[test]
    fn test_event_timestamp_utc() {
        let event = WebhookEvent::from_object(&sample()).unwrap();
        let ts = event.timestamp_utc().unwrap();
        assert_eq!(ts.year(), 2025);

        let mut object = sample();
        object.insert("timestamp".into(), json!("yesterday"));
        let event = WebhookEvent::from_object(&object).unwrap();
        assert!(event.timestamp_utc().is_none());
    }

    #[test]
    fn test_event_unknown_status_rejected() {
        let mut object = sample();
        object.insert("status".into(), json!("REFUNDED"));
        let err = WebhookEvent::from_object(&object).unwrap_err();
        assert_eq!(err.kind(), ErrorCode::InvalidParam);
    }
}
