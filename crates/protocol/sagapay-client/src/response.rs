//! Gateway response interpretation.

use serde_json::Value;

use sagapay_types::constants::DEFAULT_API_ERROR_MESSAGE;
use sagapay_types::{ApiResult, ErrorCode, SagaPayError, SagaPayResult};

/// Turn a status and raw body into a result.
///
/// The body must be a JSON object whatever the status. Statuses of 400 and
/// above become [`SagaPayError::Api`] carrying the body's `message` and
/// `error` fields.
pub fn map_response(status: u16, body: &str) -> SagaPayResult<ApiResult> {
    let object = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(object)) => object,
        Ok(_) => {
            return Err(SagaPayError::invalid_response(
                "Invalid JSON response: expected an object",
                body,
            ))
        }
        Err(e) => {
            return Err(SagaPayError::invalid_response(
                format!("Invalid JSON response: {}", e),
                body,
            ))
        }
    };

    if status >= 400 {
        let message = match object.get("message") {
            None | Some(Value::Null) => DEFAULT_API_ERROR_MESSAGE.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        };
        let code = object
            .get("error")
            .and_then(error_code)
            .unwrap_or_else(|| i64::from(ErrorCode::ApiError.code()));

        return Err(SagaPayError::Api {
            message,
            code,
            http_status: status,
        });
    }

    Ok(object)
}

/// Integer or integer-valued string.
fn error_code(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_passthrough() {
        let result = map_response(200, r#"{"id":"abc","status":"PENDING"}"#).unwrap();
        assert_eq!(result.get("id"), Some(&json!("abc")));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_api_error_with_server_code() {
        let err = map_response(404, r#"{"message":"not found","error":4040}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorCode::ApiError);
        assert_eq!(err.message(), "not found");
        assert_eq!(err.code(), 4040);
        assert_eq!(err.http_status(), 404);
    }

    #[test]
    fn test_api_error_string_code() {
        let err = map_response(422, r#"{"message":"bad","error":"17"}"#).unwrap_err();
        assert_eq!(err.code(), 17);
    }

    #[test]
    fn test_api_error_defaults() {
        let err = map_response(500, "{}").unwrap_err();
        assert_eq!(err.message(), "API error");
        assert_eq!(err.code(), 1002);
        assert_eq!(err.http_status(), 500);

        let err = map_response(400, r#"{"message":null,"error":"Bad Request"}"#).unwrap_err();
        assert_eq!(err.message(), "API error");
        assert_eq!(err.code(), 1002);
    }

    #[test]
    fn test_api_error_non_string_message() {
        let err = map_response(400, r#"{"message":["amount is required"]}"#).unwrap_err();
        assert_eq!(err.message(), r#"["amount is required"]"#);
    }

    #[test]
    fn test_status_boundary() {
        assert!(map_response(399, "{}").is_ok());
        assert!(map_response(400, "{}").is_err());
    }

    #[test]
    fn test_non_json_body() {
        let err = map_response(200, "<html>oops</html>").unwrap_err();
        assert_eq!(err.kind(), ErrorCode::InvalidResponse);
        match err {
            SagaPayError::InvalidResponse { body, .. } => assert_eq!(body, "<html>oops</html>"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_non_json_error_body_is_invalid_response() {
        let err = map_response(502, "Bad Gateway").unwrap_err();
        assert_eq!(err.kind(), ErrorCode::InvalidResponse);
    }

    #[test]
    fn test_non_object_json() {
        for body in ["[]", "\"ok\"", "1", "null"] {
            let err = map_response(200, body).unwrap_err();
            assert_eq!(err.kind(), ErrorCode::InvalidResponse);
        }
    }
}
