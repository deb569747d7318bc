//! Typed builders for the create-deposit and create-withdrawal calls.
//!
//! Both convert into [`Params`], so callers can use them or build the raw map
//! themselves; the client validates either form the same way.

use crate::constants::NATIVE_CONTRACT_ADDRESS;
use crate::enums::AddressType;
use crate::params::Params;

/// Parameters for `POST /create-deposit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositRequest {
    /// Network identifier, e.g. `BEP20`, `ERC20`.
    pub network_type: String,
    /// Token contract, or `"0"` for the native currency.
    pub contract_address: String,
    /// Expected amount as a decimal string.
    pub amount: String,
    /// URL the gateway notifies on status changes.
    pub ipn_url: String,
    /// Opaque caller reference echoed back in notifications.
    pub udf: Option<String>,
    /// Address lifetime.
    pub address_type: Option<AddressType>,
}

impl DepositRequest {
    /// Create a deposit request with the required fields.
    pub fn new(
        network_type: impl Into<String>,
        contract_address: impl Into<String>,
        amount: impl Into<String>,
        ipn_url: impl Into<String>,
    ) -> Self {
        Self {
            network_type: network_type.into(),
            contract_address: contract_address.into(),
            amount: amount.into(),
            ipn_url: ipn_url.into(),
            udf: None,
            address_type: None,
        }
    }

    /// Deposit in the network's native currency.
    pub fn native(
        network_type: impl Into<String>,
        amount: impl Into<String>,
        ipn_url: impl Into<String>,
    ) -> Self {
        Self::new(network_type, NATIVE_CONTRACT_ADDRESS, amount, ipn_url)
    }

    /// Attach a caller reference.
    pub fn with_udf(mut self, udf: impl Into<String>) -> Self {
        self.udf = Some(udf.into());
        self
    }

    /// Set the address lifetime.
    pub fn with_address_type(mut self, address_type: AddressType) -> Self {
        self.address_type = Some(address_type);
        self
    }
}

impl From<DepositRequest> for Params {
    fn from(req: DepositRequest) -> Self {
        let mut params = Params::new()
            .with("networkType", req.network_type)
            .with("contractAddress", req.contract_address)
            .with("amount", req.amount)
            .with("ipnUrl", req.ipn_url);
        if let Some(udf) = req.udf {
            params.insert("udf", udf);
        }
        if let Some(address_type) = req.address_type {
            params.insert("type", address_type.as_str());
        }
        params
    }
}

/// Parameters for `POST /create-withdrawal`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawalRequest {
    /// Network identifier.
    pub network_type: String,
    /// Token contract, or `"0"` for the native currency.
    pub contract_address: String,
    /// Destination address.
    pub address: String,
    /// Amount as a decimal string.
    pub amount: String,
    /// URL the gateway notifies on status changes.
    pub ipn_url: String,
    /// Opaque caller reference echoed back in notifications.
    pub udf: Option<String>,
}

impl WithdrawalRequest {
    /// Create a withdrawal request with the required fields.
    pub fn new(
        network_type: impl Into<String>,
        contract_address: impl Into<String>,
        address: impl Into<String>,
        amount: impl Into<String>,
        ipn_url: impl Into<String>,
    ) -> Self {
        Self {
            network_type: network_type.into(),
            contract_address: contract_address.into(),
            address: address.into(),
            amount: amount.into(),
            ipn_url: ipn_url.into(),
            udf: None,
        }
    }

    /// Attach a caller reference.
    pub fn with_udf(mut self, udf: impl Into<String>) -> Self {
        self.udf = Some(udf.into());
        self
    }
}

impl From<WithdrawalRequest> for Params {
    fn from(req: WithdrawalRequest) -> Self {
        let mut params = Params::new()
            .with("networkType", req.network_type)
            .with("contractAddress", req.contract_address)
            .with("address", req.address)
            .with("amount", req.amount)
            .with("ipnUrl", req.ipn_url);
        if let Some(udf) = req.udf {
            params.insert("udf", udf);
        }
        params
    }
}
