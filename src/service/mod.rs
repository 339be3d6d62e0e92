//! Services shared by the commands
//!
//! Console formatting, spinners, multisig lookups, signing, announcing and
//! the sequential fetcher used to find transactions to cosign.

pub mod announce;
pub mod formatter;
pub mod metadata;
pub mod multisig;
pub mod sequential_fetcher;
pub mod signature;
pub mod spinner;

#[cfg(test)]
pub(crate) mod testing;

use thiserror::Error;

use crate::model::ModelError;
use crate::repository::RepositoryError;
use crate::resolver::ResolveError;

pub use announce::{AnnounceOptions, AnnounceOutcome, AnnounceService};
pub use metadata::{MetadataTarget, MetadataTransactionService};
pub use multisig::{MultisigService, MultisigSigner};
pub use sequential_fetcher::SequentialFetcher;
pub use signature::{SignatureRequest, TransactionSignatureService};
pub use spinner::Spinner;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Network error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("{0}")]
    Model(#[from] ModelError),

    #[error("{0}")]
    Resolve(#[from] ResolveError),

    #[error("Transaction {hash} failed with status {code}")]
    TransactionFailed { hash: String, code: String },

    #[error("Timed out waiting for transaction {0} to be confirmed")]
    StatusTimeout(String),

    #[error("Nothing to sign")]
    NoTransactions,

    #[error("Metadata value of {0} bytes exceeds the maximum of {}", metadata::MAX_METADATA_VALUE_SIZE)]
    ValueTooLong(usize),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
