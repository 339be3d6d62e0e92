//! Domain model: networks, accounts, mosaics and transactions

pub mod account;
pub mod address;
pub mod deadline;
pub mod metadata;
pub mod mosaic;
pub mod multisig;
pub mod network;
pub mod node;
pub mod restriction;
pub mod transaction;

use thiserror::Error;

pub use account::{Account, AccountInfo, PublicAccount};
pub use address::Address;
pub use deadline::{format_deadline, Deadline, DEFAULT_DEADLINE_HOURS};
pub use mosaic::{
    absolute_to_relative, parse_mosaics, parse_u64_hex, relative_to_absolute, Mosaic, MosaicFlags,
    MosaicId, MosaicInfo, NamespaceId, NetworkCurrency, UnresolvedMosaicId,
};
pub use metadata::{MetadataEntry, MetadataSearchCriteria, MetadataType};
pub use multisig::MultisigAccountInfo;
pub use network::NetworkType;
pub use node::{NetworkProperties, NodeInfo, ServerInfo, TransactionGroup, TransactionStatus};
pub use restriction::{AccountRestrictionFlags, ActionType, LinkAction};
pub use transaction::{
    CosignatureSignedTransaction, SignedTransaction, Transaction, TransactionBody,
    TransactionInfo, TransactionType,
};

/// Errors raised while parsing or building model values
#[derive(Error, Debug, PartialEq)]
pub enum ModelError {
    #[error("Invalid network type: {0}")]
    InvalidNetwork(String),
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
    #[error("Invalid id: {0}")]
    InvalidId(String),
    #[error("Invalid namespace name: {0}")]
    InvalidNamespace(String),
    #[error("Invalid mosaic: {0}")]
    InvalidMosaic(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid divisibility: {0}")]
    InvalidDivisibility(u8),
    #[error("Invalid restriction flags: {0}")]
    InvalidRestrictionFlags(String),
    #[error("Invalid action: {0}")]
    InvalidAction(String),
    #[error("Invalid hash type: {0}")]
    InvalidHashType(String),
    #[error("Invalid hash: {0}")]
    InvalidHash(String),
    #[error("Invalid generation hash: {0}")]
    InvalidGenerationHash(String),
    #[error("Invalid signature")]
    InvalidSignature,
    #[error("Transaction has no hash")]
    MissingHash,
    #[error("Transaction is not an aggregate")]
    NotAggregate,
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Key error: {0}")]
    Key(#[from] crate::crypto::KeyError),
}
