//! SagaPay gateway client.

use std::sync::Arc;

use reqwest::Url;
use tracing::{debug, warn};

use sagapay_types::constants::{
    CONTENT_TYPE_JSON, DEPOSIT_REQUIRED_PARAMS, HEADER_API_KEY, HEADER_API_SECRET,
    NATIVE_CONTRACT_ADDRESS, PATH_CHECK_TRANSACTION_STATUS, PATH_CREATE_DEPOSIT,
    PATH_CREATE_WITHDRAWAL, PATH_FETCH_WALLET_BALANCE, REQUEST_TIMEOUT,
    WITHDRAWAL_REQUIRED_PARAMS,
};
use sagapay_types::validation::require_params;
use sagapay_types::{ApiResult, Params, SagaPayError, SagaPayResult, TransactionType};
use sagapay_webhook::WebhookVerifier;

use crate::config::{ClientConfig, Credentials};
use crate::response::map_response;
use crate::transport::{HttpMethod, HttpRequest, HttpTransport, Transport};

/// Async client for the SagaPay REST API.
///
/// Cheap to clone; clones share credentials and transport. Every call is a
/// single request bounded by the gateway timeout and is never retried.
#[derive(Clone)]
pub struct ApiClient {
    credentials: Arc<Credentials>,
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    /// Create a client using the default HTTP transport.
    pub fn new(config: ClientConfig) -> SagaPayResult<Self> {
        let transport = HttpTransport::new().map_err(|e| SagaPayError::network(e.to_string()))?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a client sending through `transport`.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> SagaPayResult<Self> {
        config.validate()?;
        Ok(Self {
            credentials: Arc::new(config.credentials),
            base_url: config.base_url,
            transport,
        })
    }

    /// Create a client from `SAGAPAY_*` environment variables.
    pub fn from_env() -> SagaPayResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// The public API key.
    pub fn api_key(&self) -> &str {
        &self.credentials.api_key
    }

    /// The gateway base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// A webhook verifier keyed by this client's API secret.
    ///
    /// The secret is shared, not copied.
    pub fn webhook_verifier(&self) -> WebhookVerifier {
        WebhookVerifier::from_shared(Arc::clone(&self.credentials.api_secret))
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Create a deposit address.
    ///
    /// Requires `networkType`, `contractAddress`, `amount` and `ipnUrl`.
    /// Optional: `udf`, `type` (`TEMPORARY` or `PERMANENT`).
    pub async fn create_deposit(&self, params: impl Into<Params>) -> SagaPayResult<ApiResult> {
        let params = params.into();
        require_params(&params, DEPOSIT_REQUIRED_PARAMS)?;
        self.request(HttpMethod::Post, PATH_CREATE_DEPOSIT, &params).await
    }

    /// Request a withdrawal.
    ///
    /// Requires `networkType`, `contractAddress`, `address`, `amount` and
    /// `ipnUrl`. Optional: `udf`.
    pub async fn create_withdrawal(&self, params: impl Into<Params>) -> SagaPayResult<ApiResult> {
        let params = params.into();
        require_params(&params, WITHDRAWAL_REQUIRED_PARAMS)?;
        self.request(HttpMethod::Post, PATH_CREATE_WITHDRAWAL, &params).await
    }

    /// Look up a transaction by address.
    ///
    /// `transaction_type` must be exactly `deposit` or `withdrawal`.
    pub async fn check_transaction_status(
        &self,
        address: &str,
        transaction_type: &str,
    ) -> SagaPayResult<ApiResult> {
        let transaction_type: TransactionType = transaction_type.parse()?;
        let params = Params::new()
            .with("address", address)
            .with("type", transaction_type.as_str());
        self.request(HttpMethod::Get, PATH_CHECK_TRANSACTION_STATUS, &params).await
    }

    /// Fetch a wallet balance. `None` queries the network's native currency.
    pub async fn fetch_wallet_balance(
        &self,
        address: &str,
        network_type: &str,
        contract_address: Option<&str>,
    ) -> SagaPayResult<ApiResult> {
        let params = Params::new()
            .with("address", address)
            .with("networkType", network_type)
            .with(
                "contractAddress",
                contract_address.unwrap_or(NATIVE_CONTRACT_ADDRESS),
            );
        self.request(HttpMethod::Get, PATH_FETCH_WALLET_BALANCE, &params).await
    }

    // =========================================================================
    // Request plumbing
    // =========================================================================

    async fn request(&self, method: HttpMethod, path: &str, params: &Params) -> SagaPayResult<ApiResult> {
        let request = self.build_request(method, path, params)?;
        debug!(method = %method, path = %path, "Sending SagaPay request");

        let response = self.transport.send(request).await.map_err(|e| {
            warn!(method = %method, path = %path, error = %e, "SagaPay request failed");
            SagaPayError::network(e.to_string())
        })?;
        debug!(path = %path, status = response.status, "SagaPay response received");

        map_response(response.status, &response.body).map_err(|e| {
            if let SagaPayError::Api { code, http_status, .. } = &e {
                warn!(path = %path, http_status, code, message = %e.message(), "SagaPay API error");
            }
            e
        })
    }

    fn build_request(&self, method: HttpMethod, path: &str, params: &Params) -> SagaPayResult<HttpRequest> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path)).map_err(|e| {
            SagaPayError::invalid_param(format!("Invalid request URL: {}", e))
        })?;

        let body = match method {
            HttpMethod::Get => {
                url.query_pairs_mut().extend_pairs(params.query_pairs());
                None
            }
            HttpMethod::Post => Some(serde_json::to_string(params).map_err(|e| {
                SagaPayError::invalid_param(format!("Unencodable parameters: {}", e))
            })?),
        };

        let secret = self
            .credentials
            .api_secret
            .as_str()
            .ok_or_else(|| SagaPayError::invalid_param("API secret must be valid UTF-8"))?;

        Ok(HttpRequest {
            method,
            url: url.to_string(),
            headers: vec![
                (HEADER_API_KEY.to_string(), self.credentials.api_key.clone()),
                (HEADER_API_SECRET.to_string(), secret.to_string()),
                ("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string()),
                ("Accept".to_string(), CONTENT_TYPE_JSON.to_string()),
            ],
            body,
            timeout: REQUEST_TIMEOUT,
        })
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("api_key", &self.credentials.api_key)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
