//! SagaPay CLI binary entry point.

use clap::Parser;
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::{filter::Directive, fmt, prelude::*, EnvFilter};

use sagapay_cli::{
    cli::{Cli, Commands},
    commands,
    config::{default_config_path, CliConfig},
    error::{CliError, CliResult},
    output::OutputFormat,
};
use sagapay_types::{DepositRequest, WithdrawalRequest};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging based on --verbose flag or RUST_LOG env var
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if cli.verbose || has_rust_log {
        let mut filter = EnvFilter::from_default_env();
        if cli.verbose {
            if let Ok(directive) = "sagapay=debug".parse::<Directive>() {
                filter = filter.add_directive(directive);
            }
        }
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    }

    // Run the command
    if let Err(e) = run(cli).await {
        print_error(&e);
        std::process::exit(e.exit_code());
    }
}

/// Print a user-friendly error message with error code and recovery hint.
fn print_error(e: &CliError) {
    match e.error_code() {
        Some(code) => {
            eprintln!(
                "{} [{}]: {}",
                "Error".red().bold(),
                code.to_string().yellow(),
                e
            );
            if let Some(suggestion) = code.suggestion() {
                eprintln!("{}: {}", "Hint".cyan(), suggestion);
            }
        }
        None => eprintln!("{}: {}", "Error".red().bold(), e),
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    // Load configuration
    let config_path = cli.config.unwrap_or_else(default_config_path);
    let config = CliConfig::load(&config_path)?;

    // Get output format
    let format: OutputFormat = cli.format.into();

    // Dispatch command
    debug!(command = ?cli.command, format = %format, "Dispatching command");
    let output = match cli.command {
        // Gateway commands
        Commands::Deposit {
            network,
            contract,
            amount,
            ipn_url,
            udf,
            address_type,
        } => {
            let ipn_url = config.resolve_ipn_url(ipn_url)?;
            let mut request = DepositRequest::new(network, contract, amount, ipn_url);
            if let Some(udf) = udf {
                request = request.with_udf(udf);
            }
            if let Some(address_type) = address_type {
                request = request.with_address_type(address_type.into());
            }
            commands::deposit(&config.client()?, format, request).await?
        }

        Commands::Withdraw {
            network,
            contract,
            address,
            amount,
            ipn_url,
            udf,
        } => {
            let ipn_url = config.resolve_ipn_url(ipn_url)?;
            let mut request = WithdrawalRequest::new(network, contract, address, amount, ipn_url);
            if let Some(udf) = udf {
                request = request.with_udf(udf);
            }
            commands::withdraw(&config.client()?, format, request).await?
        }

        Commands::Status {
            address,
            transaction_type,
        } => commands::status(&config.client()?, format, &address, &transaction_type).await?,

        Commands::Balance {
            address,
            network,
            contract,
        } => {
            commands::balance(
                &config.client()?,
                format,
                &address,
                &network,
                contract.as_deref(),
            )
            .await?
        }

        // Webhook tools
        Commands::Sign { file } => commands::sign(&config.secret()?, format, &file)?,

        Commands::VerifyWebhook { file, signature } => commands::verify_webhook(
            &config.webhook_verifier()?,
            format,
            &file,
            signature.as_deref(),
        )?,
    };

    // Print output
    println!("{}", output);

    Ok(())
}
