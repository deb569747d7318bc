//! Fetch wallet balance command.

use sagapay_client::ApiClient;

use crate::error::CliResult;
use crate::output::{ApiOutput, OutputFormat, Render};

/// Execute the balance command.
pub async fn balance(
    client: &ApiClient,
    format: OutputFormat,
    address: &str,
    network: &str,
    contract: Option<&str>,
) -> CliResult<String> {
    let result = client
        .fetch_wallet_balance(address, network, contract)
        .await?;
    Ok(ApiOutput::new("Balance", result).render(format))
}
