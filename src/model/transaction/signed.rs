//! Signed transactions and cosignatures ready to announce

use serde::{Deserialize, Serialize};

use super::TransactionType;
use crate::crypto::PublicKey;
use crate::model::network::NetworkType;

/// A cosignature attached to an aggregate transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cosignature {
    pub signer: PublicKey,
    pub signature: String,
    #[serde(default)]
    pub version: u64,
}

/// A signed transaction, as announced to the network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransaction {
    /// Hex encoded signed payload
    pub payload: String,
    /// Uppercase hex transaction hash
    pub hash: String,
    pub signer: PublicKey,
    pub transaction_type: TransactionType,
    pub network_type: NetworkType,
}

impl SignedTransaction {
    pub fn is_aggregate_bonded(&self) -> bool {
        self.transaction_type == TransactionType::AggregateBonded
    }

    pub fn is_hash_lock(&self) -> bool {
        self.transaction_type == TransactionType::HashLock
    }
}

/// A cosignature of an aggregate bonded transaction, announced on its own
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosignatureSignedTransaction {
    pub parent_hash: String,
    pub signature: String,
    pub signer_public_key: PublicKey,
    #[serde(with = "u64_string")]
    pub version: u64,
}

impl CosignatureSignedTransaction {
    /// Check the cosignature against the parent hash it claims to sign
    pub fn verify(&self) -> bool {
        let (Ok(hash), Ok(signature)) =
            (hex::decode(&self.parent_hash), hex::decode(&self.signature))
        else {
            return false;
        };
        self.signer_public_key
            .verify(&hash, &signature)
            .unwrap_or(false)
    }

    pub fn into_cosignature(self) -> Cosignature {
        Cosignature {
            signer: self.signer_public_key,
            signature: self.signature,
            version: self.version,
        }
    }
}

/// The gateway encodes 64-bit numbers as decimal strings
pub(crate) mod u64_string {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }
        match Raw::deserialize(deserializer)? {
            Raw::Text(text) => text.parse().map_err(de::Error::custom),
            Raw::Number(n) => Ok(n),
        }
    }
}
