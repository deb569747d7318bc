//! Create deposit command.

use sagapay_client::ApiClient;
use sagapay_types::DepositRequest;

use crate::error::CliResult;
use crate::output::{ApiOutput, OutputFormat, Render};

/// Execute the deposit command.
pub async fn deposit(
    client: &ApiClient,
    format: OutputFormat,
    request: DepositRequest,
) -> CliResult<String> {
    let result = client.create_deposit(request).await?;
    Ok(ApiOutput::new("Deposit", result).render(format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sagapay_test_utils::{test_client, MockTransport};
    use serde_json::json;

    #[tokio::test]
    async fn test_deposit_renders_gateway_response() {
        let mock = MockTransport::new().with_json(
            200,
            json!({"id": "dep_1", "address": "0xnew", "status": "PENDING"}),
        );
        let client = test_client(&mock);

        let request = DepositRequest::native("BEP20", "0.5", "https://shop.example/ipn");
        let output = deposit(&client, OutputFormat::Json, request).await.unwrap();

        assert!(output.contains("\"address\": \"0xnew\""));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_deposit_missing_field_not_sent() {
        let mock = MockTransport::new();
        let client = test_client(&mock);

        let request = DepositRequest::native("BEP20", "", "https://shop.example/ipn");
        let err = deposit(&client, OutputFormat::Human, request).await.unwrap_err();

        assert_eq!(err.exit_code(), 4);
        assert!(!mock.was_called());
    }
}
