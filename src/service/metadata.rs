//! Metadata transactions
//!
//! A metadata transaction carries the difference to the value already on
//! chain: the XOR of old and new bytes plus the change in length.

use std::sync::Arc;

use crate::model::transaction::MetadataBody;
use crate::model::{
    Address, Deadline, MetadataSearchCriteria, MetadataType, NetworkType, Transaction,
    TransactionBody, UnresolvedMosaicId,
};
use crate::repository::MetadataRepository;

use super::{ServiceError, ServiceResult};

/// Largest metadata value accepted by the network
pub const MAX_METADATA_VALUE_SIZE: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataTarget {
    Account,
    Mosaic(UnresolvedMosaicId),
}

impl MetadataTarget {
    fn metadata_type(&self) -> MetadataType {
        match self {
            MetadataTarget::Account => MetadataType::Account,
            MetadataTarget::Mosaic(_) => MetadataType::Mosaic,
        }
    }

    fn target_id(&self) -> Option<UnresolvedMosaicId> {
        match self {
            MetadataTarget::Account => None,
            MetadataTarget::Mosaic(id) => Some(*id),
        }
    }
}

pub struct MetadataTransactionService {
    repository: Arc<dyn MetadataRepository>,
}

impl MetadataTransactionService {
    pub fn new(repository: Arc<dyn MetadataRepository>) -> Self {
        Self { repository }
    }

    /// Build a metadata transaction setting `key` of `target_address` to
    /// `value`, as seen from `source_address`
    #[allow(clippy::too_many_arguments)]
    pub async fn create_metadata_transaction(
        &self,
        target: MetadataTarget,
        network_type: NetworkType,
        deadline: Deadline,
        target_address: &Address,
        scoped_metadata_key: u64,
        value: &[u8],
        source_address: &Address,
    ) -> ServiceResult<Transaction> {
        if value.len() > MAX_METADATA_VALUE_SIZE {
            return Err(ServiceError::ValueTooLong(value.len()));
        }
        let criteria = MetadataSearchCriteria {
            source_address: Some(*source_address),
            target_address: Some(*target_address),
            scoped_metadata_key: Some(scoped_metadata_key),
            target_id: target.target_id().map(|id| id.as_u64()),
            metadata_type: Some(target.metadata_type()),
        };
        let current = self.repository.search(&criteria).await?.into_iter().next();

        let (value_size_delta, value) = match current {
            Some(entry) => {
                log::debug!(
                    "Metadata {:016X} exists with {} bytes",
                    scoped_metadata_key,
                    entry.value.len()
                );
                (
                    value.len() as i16 - entry.value.len() as i16,
                    xor_values(&entry.value, value),
                )
            }
            None => (value.len() as i16, value.to_vec()),
        };

        let body = MetadataBody {
            target_address: *target_address,
            scoped_metadata_key,
            target_id: target.target_id(),
            value_size_delta,
            value,
        };
        let body = match target {
            MetadataTarget::Account => TransactionBody::AccountMetadata(body),
            MetadataTarget::Mosaic(_) => TransactionBody::MosaicMetadata(body),
        };
        Ok(Transaction::new(network_type, deadline, 0, body))
    }
}

/// XOR two values, padding the shorter one with zeros
pub fn xor_values(old: &[u8], new: &[u8]) -> Vec<u8> {
    let len = old.len().max(new.len());
    (0..len)
        .map(|i| old.get(i).copied().unwrap_or(0) ^ new.get(i).copied().unwrap_or(0))
        .collect()
}
