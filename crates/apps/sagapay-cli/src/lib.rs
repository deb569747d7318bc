//! Command-line interface for the SagaPay payment gateway.
//!
//! This crate provides the `sagapay` binary. It includes commands for:
//!
//! - **Payments**: Create deposit addresses and withdrawals
//! - **Queries**: Check transaction status and wallet balances
//! - **Webhook Tools**: Sign bodies and verify notifications offline
//!
//! # Quick Start
//!
//! ```bash
//! export SAGAPAY_API_KEY=...
//! export SAGAPAY_API_SECRET=...
//!
//! # Create a deposit address for 0.5 BNB
//! sagapay deposit --network BEP20 --amount 0.5 --ipn-url https://shop.example/ipn
//!
//! # Check its status
//! sagapay status 0x742d... deposit
//!
//! # Test a webhook endpoint body
//! sagapay sign body.json
//! sagapay verify-webhook body.json --signature <hex>
//! ```
//!
//! # Output Formats
//!
//! All commands support `--format` for output control:
//!
//! - `human` (default): Human-readable with colors
//! - `json`: Machine-readable JSON
//!
//! # Configuration
//!
//! Configuration is loaded from `config.toml` in the platform config
//! directory (or `$SAGAPAY_CONFIG_DIR`). Override with `--config`.
//!
//! ```toml
//! [gateway]
//! api_key = "${SHOP_SAGAPAY_KEY}"
//! api_secret = "${SHOP_SAGAPAY_SECRET}"
//! base_url = "https://api.sagapay.net"
//!
//! [defaults]
//! ipn_url = "https://shop.example/ipn"
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

// Re-export main types
pub use cli::{AddressTypeArg, Cli, Commands, OutputFormatArg};
pub use config::CliConfig;
pub use error::{CliError, CliResult};
pub use output::{OutputFormat, Render};
