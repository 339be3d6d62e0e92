//! Transaction bodies
//!
//! Each supported transaction type has a body struct; anything else is kept
//! as [`TransactionBody::Unknown`] so listings never fail on new types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::signed::Cosignature;
use super::TransactionType;
use crate::crypto::PublicKey;
use crate::model::address::Address;
use crate::model::mosaic::{Mosaic, UnresolvedMosaicId};
use crate::model::restriction::AccountRestrictionFlags;
use crate::model::ModelError;

/// Hash algorithm used by secret locks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HashType {
    #[serde(rename = "Op_Sha3_256")]
    Sha3_256,
    #[serde(rename = "Op_Hash_160")]
    Hash160,
    #[serde(rename = "Op_Hash_256")]
    Hash256,
}

impl HashType {
    pub fn id(&self) -> u8 {
        match self {
            HashType::Sha3_256 => 0,
            HashType::Hash160 => 1,
            HashType::Hash256 => 2,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(HashType::Sha3_256),
            1 => Some(HashType::Hash160),
            2 => Some(HashType::Hash256),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            HashType::Sha3_256 => "Op_Sha3_256",
            HashType::Hash160 => "Op_Hash_160",
            HashType::Hash256 => "Op_Hash_256",
        }
    }

    /// Expected secret length in hex characters
    pub fn secret_hex_len(&self) -> usize {
        match self {
            HashType::Hash160 => 40,
            HashType::Sha3_256 | HashType::Hash256 => 64,
        }
    }
}

impl fmt::Display for HashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(id) = s.trim().parse::<u8>() {
            return Self::from_id(id).ok_or_else(|| ModelError::InvalidHashType(s.to_string()));
        }
        let normalized = s.trim().to_ascii_lowercase().replace('_', "");
        match normalized.trim_start_matches("op") {
            "sha3256" => Ok(HashType::Sha3_256),
            "hash160" => Ok(HashType::Hash160),
            "hash256" => Ok(HashType::Hash256),
            _ => Err(ModelError::InvalidHashType(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferBody {
    pub recipient: Address,
    pub mosaics: Vec<Mosaic>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashLockBody {
    pub mosaic: Mosaic,
    /// Blocks the lock stays active
    pub duration: u64,
    /// Hash of the aggregate bonded transaction being locked for
    pub hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretLockBody {
    pub recipient: Address,
    pub mosaic: Mosaic,
    pub duration: u64,
    pub hash_type: HashType,
    pub secret: String,
}

/// Shared by account and mosaic metadata transactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataBody {
    pub target_address: Address,
    pub scoped_metadata_key: u64,
    /// Set for mosaic metadata
    pub target_id: Option<UnresolvedMosaicId>,
    pub value_size_delta: i16,
    pub value: Vec<u8>,
}

impl MetadataBody {
    pub fn scoped_metadata_key_hex(&self) -> String {
        format!("{:016X}", self.scoped_metadata_key)
    }

    pub fn value_lossy(&self) -> String {
        String::from_utf8_lossy(&self.value).into_owned()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountMosaicRestrictionBody {
    pub flags: AccountRestrictionFlags,
    pub additions: Vec<UnresolvedMosaicId>,
    pub deletions: Vec<UnresolvedMosaicId>,
}

/// A transaction embedded in an aggregate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InnerTransaction {
    pub signer: PublicKey,
    pub body: TransactionBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AggregateBody {
    pub inner: Vec<InnerTransaction>,
    pub cosignatures: Vec<Cosignature>,
}

impl AggregateBody {
    pub fn new(inner: Vec<InnerTransaction>) -> Self {
        Self {
            inner,
            cosignatures: Vec::new(),
        }
    }

    pub fn is_cosigned_by(&self, public_key: &PublicKey) -> bool {
        self.cosignatures.iter().any(|c| &c.signer == public_key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransactionBody {
    Transfer(TransferBody),
    HashLock(HashLockBody),
    SecretLock(SecretLockBody),
    AccountMetadata(MetadataBody),
    MosaicMetadata(MetadataBody),
    AccountMosaicRestriction(AccountMosaicRestrictionBody),
    AggregateComplete(AggregateBody),
    AggregateBonded(AggregateBody),
    Unknown { type_id: u16 },
}

impl TransactionBody {
    pub fn transaction_type(&self) -> TransactionType {
        match self {
            TransactionBody::Transfer(_) => TransactionType::Transfer,
            TransactionBody::HashLock(_) => TransactionType::HashLock,
            TransactionBody::SecretLock(_) => TransactionType::SecretLock,
            TransactionBody::AccountMetadata(_) => TransactionType::AccountMetadata,
            TransactionBody::MosaicMetadata(_) => TransactionType::MosaicMetadata,
            TransactionBody::AccountMosaicRestriction(_) => {
                TransactionType::AccountMosaicRestriction
            }
            TransactionBody::AggregateComplete(_) => TransactionType::AggregateComplete,
            TransactionBody::AggregateBonded(_) => TransactionType::AggregateBonded,
            TransactionBody::Unknown { type_id } => TransactionType::Other(*type_id),
        }
    }

    pub fn aggregate(&self) -> Option<&AggregateBody> {
        match self {
            TransactionBody::AggregateComplete(body) | TransactionBody::AggregateBonded(body) => {
                Some(body)
            }
            _ => None,
        }
    }

    pub fn aggregate_mut(&mut self) -> Option<&mut AggregateBody> {
        match self {
            TransactionBody::AggregateComplete(body) | TransactionBody::AggregateBonded(body) => {
                Some(body)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hash_type() {
        assert_eq!("Op_Sha3_256".parse::<HashType>().unwrap(), HashType::Sha3_256);
        assert_eq!("hash_160".parse::<HashType>().unwrap(), HashType::Hash160);
        assert_eq!("2".parse::<HashType>().unwrap(), HashType::Hash256);
        assert!("md5".parse::<HashType>().is_err());
        assert_eq!(HashType::Hash160.secret_hex_len(), 40);
    }

    #[test]
    fn test_body_type_mapping() {
        let body = TransactionBody::AggregateBonded(AggregateBody::default());
        assert_eq!(body.transaction_type(), TransactionType::AggregateBonded);
        assert!(body.aggregate().is_some());

        let unknown = TransactionBody::Unknown { type_id: 0x414E };
        assert_eq!(unknown.transaction_type(), TransactionType::Other(0x414E));
        assert!(unknown.aggregate().is_none());
    }
}
