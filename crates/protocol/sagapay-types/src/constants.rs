//! Gateway constants.
//!
//! Endpoint paths, header names, timeouts and the required-field lists that
//! the client and webhook verifier enforce.

use std::time::Duration;

// =============================================================================
// Endpoints
// =============================================================================

/// Default gateway base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.sagapay.net";

/// Create a deposit address (POST).
pub const PATH_CREATE_DEPOSIT: &str = "/create-deposit";

/// Create a withdrawal (POST).
pub const PATH_CREATE_WITHDRAWAL: &str = "/create-withdrawal";

/// Query transactions for an address (GET).
pub const PATH_CHECK_TRANSACTION_STATUS: &str = "/check-transaction-status";

/// Query the balance of an address (GET).
pub const PATH_FETCH_WALLET_BALANCE: &str = "/fetch-wallet-balance";

/// Fixed timeout applied to every outbound request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// =============================================================================
// Headers
// =============================================================================

/// API key header (client → gateway).
pub const HEADER_API_KEY: &str = "x-api-key";

/// API secret header (client → gateway).
pub const HEADER_API_SECRET: &str = "x-api-secret";

/// Webhook signature header (gateway → merchant).
pub const HEADER_SIGNATURE: &str = "x-sagapay-signature";

/// JSON media type used for both `Content-Type` and `Accept`.
pub const CONTENT_TYPE_JSON: &str = "application/json";

// =============================================================================
// Parameters
// =============================================================================

/// Contract address denoting the network's native currency.
pub const NATIVE_CONTRACT_ADDRESS: &str = "0";

/// Message used for HTTP errors whose body carries no `message`.
pub const DEFAULT_API_ERROR_MESSAGE: &str = "API error";

/// Required parameters for `POST /create-deposit`.
pub const DEPOSIT_REQUIRED_PARAMS: &[&str] = &["networkType", "contractAddress", "amount", "ipnUrl"];

/// Required parameters for `POST /create-withdrawal`.
pub const WITHDRAWAL_REQUIRED_PARAMS: &[&str] = &[
    "networkType",
    "contractAddress",
    "address",
    "amount",
    "ipnUrl",
];

/// Required fields of an inbound webhook payload, in check order.
pub const WEBHOOK_REQUIRED_FIELDS: &[&str] = &[
    "id",
    "type",
    "status",
    "address",
    "networkType",
    "amount",
    "timestamp",
];
