//! Required-field checks.
//!
//! A field is missing when it is absent, JSON `null`, or the empty string.
//! Checks run in the order the field list is given and report the first
//! missing field only.

use serde_json::{Map, Value};

use crate::error::{SagaPayError, SagaPayResult};
use crate::params::Params;

/// Ensure every `required` key is present and non-empty in `params`.
pub fn require_params(params: &Params, required: &[&str]) -> SagaPayResult<()> {
    match required.iter().find(|key| params.is_blank(key)) {
        Some(key) => Err(SagaPayError::missing_param(key)),
        None => Ok(()),
    }
}

/// Ensure every `required` field is present and non-empty in a JSON object.
pub fn require_fields(object: &Map<String, Value>, required: &[&str]) -> SagaPayResult<()> {
    match required.iter().find(|key| is_blank_value(object.get(**key))) {
        Some(key) => Err(SagaPayError::missing_param(key)),
        None => Ok(()),
    }
}

fn is_blank_value(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}
