//! Verify a webhook body command.

use std::path::Path;

use serde_json::Map;

use sagapay_webhook::{WebhookResponse, WebhookVerifier};

use crate::error::{CliError, CliResult};
use crate::output::{OutputFormat, Render, WebhookOutput};

/// Execute the verify-webhook command.
///
/// Prints the envelope a webhook endpoint would answer with. A rejected
/// notification is not a command failure.
pub fn verify_webhook(
    verifier: &WebhookVerifier,
    format: OutputFormat,
    file: &Path,
    signature: Option<&str>,
) -> CliResult<String> {
    if !file.exists() {
        return Err(CliError::FileNotFound(file.display().to_string()));
    }
    let body = std::fs::read(file)?;

    let response = match verifier.process(signature, &body) {
        Ok(payload) => {
            let mut extra = Map::new();
            if let Some(id) = payload.get("id") {
                extra.insert("id".to_string(), id.clone());
            }
            verifier.success_response(extra)
        }
        Err(e) => WebhookResponse::from(&e),
    };

    let output = WebhookOutput {
        status: response.status(),
        body: response.body().clone(),
    };
    Ok(output.render(format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sagapay_crypto::sign;
    use sagapay_test_utils::{sample_webhook_body, TEST_API_SECRET};
    use std::io::Write;

    fn body_file(body: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(body).unwrap();
        file
    }

    fn run(body: &[u8], signature: Option<&str>) -> serde_json::Value {
        let file = body_file(body);
        let verifier = WebhookVerifier::new(TEST_API_SECRET);
        let output = verify_webhook(&verifier, OutputFormat::Json, file.path(), signature).unwrap();
        serde_json::from_str(&output).unwrap()
    }

    #[test]
    fn test_accepted() {
        let body = sample_webhook_body();
        let signature = sign(&body, TEST_API_SECRET.as_bytes()).to_string();
        let json = run(&body, Some(&signature));
        assert_eq!(json, serde_json::json!({"received": true, "id": "1"}));
    }

    #[test]
    fn test_wrong_signature() {
        let body = sample_webhook_body();
        let signature = sign(&body, b"another-secret").to_string();
        let json = run(&body, Some(&signature));
        assert_eq!(json["received"], false);
        assert_eq!(json["code"], 1004);
    }

    #[test]
    fn test_missing_signature() {
        let json = run(&sample_webhook_body(), None);
        assert_eq!(json["error"], "Missing SagaPay signature in headers");
    }

    #[test]
    fn test_missing_field() {
        let body = br#"{"id":"1","type":"deposit","status":"COMPLETED","address":"0xabc","networkType":"ERC20","timestamp":"2025-01-01T00:00:00Z"}"#;
        let signature = sign(body, TEST_API_SECRET.as_bytes()).to_string();
        let json = run(body, Some(&signature));
        assert_eq!(json["code"], 1003);
    }
}
