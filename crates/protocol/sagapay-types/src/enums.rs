//! Enumeration types used by the gateway.

use serde::{Deserialize, Serialize};

use crate::error::SagaPayError;

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Funds received at a deposit address
    Deposit,
    /// Funds sent out to an external address
    Withdrawal,
}

impl TransactionType {
    /// Wire form of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdrawal => "withdrawal",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransactionType {
    type Err = SagaPayError;

    /// Parsing is exact and case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deposit" => Ok(Self::Deposit),
            "withdrawal" => Ok(Self::Withdrawal),
            _ => Err(SagaPayError::invalid_param(
                "Type must be 'deposit' or 'withdrawal'",
            )),
        }
    }
}

/// Lifecycle state of a transaction as reported by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    /// Created, awaiting funds or broadcast
    Pending,
    /// Seen on chain, awaiting confirmations
    Processing,
    /// Confirmed
    Completed,
    /// Failed on chain or rejected
    Failed,
    /// Cancelled or expired
    Cancelled,
}

impl TransactionStatus {
    /// Wire form of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Processing => "PROCESSING",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Returns true if no further notifications are expected.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Cancelled)
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransactionStatus {
    type Err = SagaPayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "PROCESSING" => Ok(Self::Processing),
            "COMPLETED" => Ok(Self::Completed),
            "FAILED" => Ok(Self::Failed),
            "CANCELLED" => Ok(Self::Cancelled),
            other => Err(SagaPayError::invalid_param(format!(
                "Unknown transaction status: {}",
                other
            ))),
        }
    }
}

/// Lifetime of a deposit address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AddressType {
    /// Expires after 24 hours
    #[default]
    Temporary,
    /// Never expires
    Permanent,
}

impl AddressType {
    /// Wire form of the address type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Temporary => "TEMPORARY",
            Self::Permanent => "PERMANENT",
        }
    }
}

impl std::fmt::Display for AddressType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AddressType {
    type Err = SagaPayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TEMPORARY" => Ok(Self::Temporary),
            "PERMANENT" => Ok(Self::Permanent),
            _ => Err(SagaPayError::invalid_param(
                "Address type must be 'TEMPORARY' or 'PERMANENT'",
            )),
        }
    }
}
