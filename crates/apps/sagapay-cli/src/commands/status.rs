//! Check transaction status command.

use sagapay_client::ApiClient;

use crate::error::CliResult;
use crate::output::{ApiOutput, OutputFormat, Render};

/// Execute the status command.
pub async fn status(
    client: &ApiClient,
    format: OutputFormat,
    address: &str,
    transaction_type: &str,
) -> CliResult<String> {
    let result = client
        .check_transaction_status(address, transaction_type)
        .await?;
    Ok(ApiOutput::new("Transaction Status", result).render(format))
}
