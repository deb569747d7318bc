//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use sagapay_types::AddressType;

use crate::output::OutputFormat;

/// SagaPay gateway CLI.
#[derive(Parser, Debug)]
#[command(name = "sagapay")]
#[command(author = "SagaPay Team")]
#[command(version)]
#[command(about = "Command-line interface for the SagaPay payment gateway")]
#[command(
    long_about = "Create deposits and withdrawals, query transactions and balances, and test webhook endpoints against the SagaPay gateway.\n\nCredentials are read from the config file or SAGAPAY_API_KEY / SAGAPAY_API_SECRET."
)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (human or json).
    #[arg(short, long, global = true, default_value = "human")]
    pub format: OutputFormatArg,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Output format argument for clap.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormatArg {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Deposit address lifetime argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AddressTypeArg {
    /// Address expires after the deposit window.
    Temporary,
    /// Address stays assigned to the merchant.
    Permanent,
}

impl From<AddressTypeArg> for AddressType {
    fn from(arg: AddressTypeArg) -> Self {
        match arg {
            AddressTypeArg::Temporary => AddressType::Temporary,
            AddressTypeArg::Permanent => AddressType::Permanent,
        }
    }
}

/// CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    // =========================================================================
    // Gateway Commands
    // =========================================================================
    /// Create a deposit address.
    Deposit {
        /// Network identifier (e.g. BEP20, ERC20, TRC20).
        #[arg(long)]
        network: String,

        /// Token contract address; 0 for the native currency.
        #[arg(long, default_value = "0")]
        contract: String,

        /// Amount as a decimal string.
        #[arg(long)]
        amount: String,

        /// URL the gateway notifies on status changes.
        #[arg(long)]
        ipn_url: Option<String>,

        /// Caller reference echoed back in notifications.
        #[arg(long)]
        udf: Option<String>,

        /// Address lifetime.
        #[arg(long, value_enum)]
        address_type: Option<AddressTypeArg>,
    },

    /// Request a withdrawal.
    Withdraw {
        /// Network identifier.
        #[arg(long)]
        network: String,

        /// Token contract address; 0 for the native currency.
        #[arg(long, default_value = "0")]
        contract: String,

        /// Destination address.
        #[arg(long)]
        address: String,

        /// Amount as a decimal string.
        #[arg(long)]
        amount: String,

        /// URL the gateway notifies on status changes.
        #[arg(long)]
        ipn_url: Option<String>,

        /// Caller reference echoed back in notifications.
        #[arg(long)]
        udf: Option<String>,
    },

    /// Check a transaction's status.
    Status {
        /// Deposit or withdrawal address.
        address: String,

        /// Transaction type: deposit or withdrawal.
        #[arg(value_name = "TYPE")]
        transaction_type: String,
    },

    /// Fetch a wallet balance.
    Balance {
        /// Wallet address.
        address: String,

        /// Network identifier.
        #[arg(long)]
        network: String,

        /// Token contract address; omit for the native currency.
        #[arg(long)]
        contract: Option<String>,
    },

    // =========================================================================
    // Webhook Tools
    // =========================================================================
    /// Sign a file as the gateway would sign a webhook body.
    Sign {
        /// File holding the exact body bytes.
        file: PathBuf,
    },

    /// Verify a webhook body and print the endpoint's response.
    VerifyWebhook {
        /// File holding the exact body bytes.
        file: PathBuf,

        /// Value of the x-sagapay-signature header.
        #[arg(short, long)]
        signature: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        // Test that CLI can be constructed
        Cli::command().debug_assert();
    }

    #[test]
    fn test_deposit_args() {
        let cli = Cli::try_parse_from([
            "sagapay",
            "deposit",
            "--network",
            "BEP20",
            "--amount",
            "0.5",
            "--address-type",
            "permanent",
        ])
        .unwrap();
        match cli.command {
            Commands::Deposit {
                contract,
                ipn_url,
                address_type,
                ..
            } => {
                assert_eq!(contract, "0");
                assert!(ipn_url.is_none());
                assert!(matches!(address_type, Some(AddressTypeArg::Permanent)));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_status_type_is_free_text() {
        // Validation of the type happens in the client.
        let cli = Cli::try_parse_from(["sagapay", "status", "0xabc", "swap"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Status { ref transaction_type, .. } if transaction_type == "swap"
        ));
    }

    #[test]
    fn test_global_format_flag() {
        let cli = Cli::try_parse_from(["sagapay", "sign", "body.json", "--format", "json"]).unwrap();
        assert!(matches!(OutputFormat::from(cli.format), OutputFormat::Json));
    }

    #[test]
    fn test_address_type_conversion() {
        let address_type: AddressType = AddressTypeArg::Permanent.into();
        assert_eq!(address_type, AddressType::Permanent);
    }
}
