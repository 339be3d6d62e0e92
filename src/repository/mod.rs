//! REST gateway repositories
//!
//! Each concern of the gateway has its own async trait so services can be
//! exercised against in-memory fakes. [`RestClient`] implements all of them
//! over HTTP.

pub mod dto;
pub mod http;

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::model::{
    AccountInfo, Address, CosignatureSignedTransaction, MetadataEntry, MetadataSearchCriteria,
    MosaicId, MosaicInfo, MultisigAccountInfo, NamespaceId, NetworkProperties, NodeInfo,
    ServerInfo, SignedTransaction, Transaction, TransactionStatus,
};

pub use http::RestClient;

/// Repository errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Cannot decode response: {0}")]
    Decode(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid url: {0}")]
    InvalidUrl(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    Asc,
    #[default]
    Desc,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Asc => f.write_str("asc"),
            Order::Desc => f.write_str("desc"),
        }
    }
}

/// Pagination for list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryParams {
    pub page_size: u32,
    pub page_number: u32,
    pub order: Order,
}

impl QueryParams {
    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            page_size,
            ..Default::default()
        }
    }

    pub(crate) fn to_pairs(self) -> Vec<(&'static str, String)> {
        vec![
            ("pageSize", self.page_size.to_string()),
            ("pageNumber", self.page_number.to_string()),
            ("order", self.order.to_string()),
        ]
    }
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            page_size: 100,
            page_number: 1,
            order: Order::Desc,
        }
    }
}

#[async_trait]
pub trait NodeRepository: Send + Sync {
    async fn server_info(&self) -> RepositoryResult<ServerInfo>;

    async fn node_info(&self) -> RepositoryResult<NodeInfo>;

    async fn network_properties(&self) -> RepositoryResult<NetworkProperties>;
}

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn account_info(&self, address: &Address) -> RepositoryResult<AccountInfo>;

    /// Confirmed transactions involving the account
    async fn transactions(
        &self,
        address: &Address,
        query: &QueryParams,
    ) -> RepositoryResult<Vec<Transaction>>;

    /// Aggregate bonded transactions waiting for cosignatures
    async fn partial_transactions(
        &self,
        address: &Address,
        query: &QueryParams,
    ) -> RepositoryResult<Vec<Transaction>>;
}

#[async_trait]
pub trait MosaicRepository: Send + Sync {
    /// `None` when no mosaic has the id
    async fn mosaic_info(&self, id: MosaicId) -> RepositoryResult<Option<MosaicInfo>>;
}

#[async_trait]
pub trait NamespaceRepository: Send + Sync {
    /// The mosaic a namespace is an alias for, if any
    async fn linked_mosaic_id(&self, id: NamespaceId) -> RepositoryResult<Option<MosaicId>>;
}

#[async_trait]
pub trait MetadataRepository: Send + Sync {
    async fn search(&self, criteria: &MetadataSearchCriteria)
        -> RepositoryResult<Vec<MetadataEntry>>;
}

#[async_trait]
pub trait MultisigRepository: Send + Sync {
    /// `None` when the account takes part in no multisig
    async fn multisig_info(&self, address: &Address)
        -> RepositoryResult<Option<MultisigAccountInfo>>;
}

#[async_trait]
pub trait TransactionRepository: Send + Sync {
    async fn announce(&self, signed: &SignedTransaction) -> RepositoryResult<String>;

    async fn announce_aggregate_bonded(&self, signed: &SignedTransaction)
        -> RepositoryResult<String>;

    async fn announce_cosignature(
        &self,
        cosignature: &CosignatureSignedTransaction,
    ) -> RepositoryResult<String>;

    async fn status(&self, hash: &str) -> RepositoryResult<TransactionStatus>;
}

/// One handle per repository, all usually backed by the same client
#[derive(Clone)]
pub struct Repositories {
    pub node: Arc<dyn NodeRepository>,
    pub account: Arc<dyn AccountRepository>,
    pub mosaic: Arc<dyn MosaicRepository>,
    pub namespace: Arc<dyn NamespaceRepository>,
    pub metadata: Arc<dyn MetadataRepository>,
    pub multisig: Arc<dyn MultisigRepository>,
    pub transaction: Arc<dyn TransactionRepository>,
}

impl Repositories {
    pub fn from_client(client: RestClient) -> Self {
        let client = Arc::new(client);
        Self {
            node: client.clone(),
            account: client.clone(),
            mosaic: client.clone(),
            namespace: client.clone(),
            metadata: client.clone(),
            multisig: client.clone(),
            transaction: client,
        }
    }
}
