//! Create withdrawal command.

use sagapay_client::ApiClient;
use sagapay_types::WithdrawalRequest;

use crate::error::CliResult;
use crate::output::{ApiOutput, OutputFormat, Render};

/// Execute the withdraw command.
pub async fn withdraw(
    client: &ApiClient,
    format: OutputFormat,
    request: WithdrawalRequest,
) -> CliResult<String> {
    let result = client.create_withdrawal(request).await?;
    Ok(ApiOutput::new("Withdrawal", result).render(format))
}
