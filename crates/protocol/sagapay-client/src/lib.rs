//! Async client for the SagaPay cryptocurrency payment gateway.
//!
//! This crate implements the four merchant operations of the SagaPay REST
//! API:
//!
//! - [`ApiClient::create_deposit`] - `POST /create-deposit`
//! - [`ApiClient::create_withdrawal`] - `POST /create-withdrawal`
//! - [`ApiClient::check_transaction_status`] - `GET /check-transaction-status`
//! - [`ApiClient::fetch_wallet_balance`] - `GET /fetch-wallet-balance`
//!
//! Required parameters are checked locally before anything is sent. Every
//! request carries the merchant's `x-api-key` / `x-api-secret` headers and is
//! bounded by a fixed 30 second timeout. Failures are reported as
//! [`SagaPayError`](sagapay_types::SagaPayError) and are never retried.
//!
//! # Example
//!
//! ```no_run
//! use sagapay_client::{ApiClient, ClientConfig};
//! use sagapay_types::DepositRequest;
//!
//! # async fn example() -> sagapay_types::SagaPayResult<()> {
//! let client = ApiClient::new(ClientConfig::new("api-key", "api-secret"))?;
//!
//! let deposit = client
//!     .create_deposit(
//!         DepositRequest::native("BEP20", "0.5", "https://shop.example/ipn")
//!             .with_udf("order-123"),
//!     )
//!     .await?;
//! println!("pay to {:?}", deposit.get("address"));
//!
//! let balance = client.fetch_wallet_balance("0x742d", "BEP20", None).await?;
//! println!("balance: {:?}", balance.get("balance"));
//! # Ok(())
//! # }
//! ```
//!
//! # Testing
//!
//! The HTTP layer sits behind the [`Transport`] trait; use
//! [`ApiClient::with_transport`] to substitute a fake.

pub mod client;
pub mod config;
pub mod response;
pub mod transport;

pub use client::ApiClient;
pub use config::{ClientConfig, Credentials};
pub use response::map_response;
pub use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, Transport, TransportError};
