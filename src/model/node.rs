//! Node and network information reported by the REST gateway

use std::fmt;

use super::mosaic::MosaicId;
use super::network::NetworkType;

/// Versions of the software a node runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerInfo {
    pub rest_version: String,
    pub sdk_version: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeInfo {
    pub public_key: String,
    pub network_generation_hash_seed: String,
    pub network_type: Option<NetworkType>,
    pub friendly_name: String,
    pub host: String,
    pub port: u16,
}

/// The subset of network properties the client needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkProperties {
    /// Seconds between the unix epoch and the network epoch
    pub epoch_adjustment: u64,
    pub currency_mosaic_id: Option<MosaicId>,
}

/// Where a transaction is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionGroup {
    Unconfirmed,
    Confirmed,
    Partial,
    Failed,
}

impl TransactionGroup {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "unconfirmed" => Some(TransactionGroup::Unconfirmed),
            "confirmed" => Some(TransactionGroup::Confirmed),
            "partial" => Some(TransactionGroup::Partial),
            "failed" => Some(TransactionGroup::Failed),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionGroup::Unconfirmed => f.write_str("unconfirmed"),
            TransactionGroup::Confirmed => f.write_str("confirmed"),
            TransactionGroup::Partial => f.write_str("partial"),
            TransactionGroup::Failed => f.write_str("failed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionStatus {
    pub group: TransactionGroup,
    /// `Success` or a `Failure_*` code
    pub code: String,
    pub hash: String,
    pub deadline: Option<u64>,
    pub height: Option<u64>,
}

impl TransactionStatus {
    pub fn is_confirmed(&self) -> bool {
        self.group == TransactionGroup::Confirmed
    }

    pub fn is_failed(&self) -> bool {
        self.group == TransactionGroup::Failed || self.code.starts_with("Failure")
    }
}
