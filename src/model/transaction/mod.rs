//! Transaction model
//!
//! Transactions are built from a header (network, fee, deadline, signer)
//! and a typed body. Signing covers the generation hash of the network and
//! the canonical JSON serialization of the unsigned transaction; aggregate
//! cosignatures are excluded so cosigning never changes the hash.

pub mod body;
pub mod signed;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::crypto::{sha3_256_parts, KeyPair, PublicKey};
use crate::model::deadline::Deadline;
use crate::model::network::NetworkType;
use crate::model::ModelError;

pub use body::{
    AccountMosaicRestrictionBody, AggregateBody, HashLockBody, HashType, InnerTransaction,
    MetadataBody, SecretLockBody, TransactionBody, TransferBody,
};
pub use signed::{Cosignature, CosignatureSignedTransaction, SignedTransaction};

/// Current transaction version for every supported type
pub const TX_VERSION: u8 = 1;

// =============================================================================
// Transaction Type
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    Transfer,
    AggregateComplete,
    AggregateBonded,
    HashLock,
    SecretLock,
    AccountMetadata,
    MosaicMetadata,
    AccountMosaicRestriction,
    Other(u16),
}

impl TransactionType {
    pub fn id(&self) -> u16 {
        match self {
            TransactionType::Transfer => 0x4154,
            TransactionType::AggregateComplete => 0x4141,
            TransactionType::AggregateBonded => 0x4241,
            TransactionType::HashLock => 0x4148,
            TransactionType::SecretLock => 0x4152,
            TransactionType::AccountMetadata => 0x4144,
            TransactionType::MosaicMetadata => 0x4244,
            TransactionType::AccountMosaicRestriction => 0x4250,
            TransactionType::Other(id) => *id,
        }
    }

    pub fn from_id(id: u16) -> Self {
        match id {
            0x4154 => TransactionType::Transfer,
            0x4141 => TransactionType::AggregateComplete,
            0x4241 => TransactionType::AggregateBonded,
            0x4148 => TransactionType::HashLock,
            0x4152 => TransactionType::SecretLock,
            0x4144 => TransactionType::AccountMetadata,
            0x4244 => TransactionType::MosaicMetadata,
            0x4250 => TransactionType::AccountMosaicRestriction,
            other => TransactionType::Other(other),
        }
    }

    pub fn is_aggregate(&self) -> bool {
        matches!(
            self,
            TransactionType::AggregateComplete | TransactionType::AggregateBonded
        )
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Transfer => f.write_str("Transfer"),
            TransactionType::AggregateComplete => f.write_str("Aggregate complete"),
            TransactionType::AggregateBonded => f.write_str("Aggregate bonded"),
            TransactionType::HashLock => f.write_str("Hash lock"),
            TransactionType::SecretLock => f.write_str("Secret lock"),
            TransactionType::AccountMetadata => f.write_str("Account metadata"),
            TransactionType::MosaicMetadata => f.write_str("Mosaic metadata"),
            TransactionType::AccountMosaicRestriction => {
                f.write_str("Account mosaic restriction")
            }
            TransactionType::Other(id) => write!(f, "Unsupported (0x{:04X})", id),
        }
    }
}

// =============================================================================
// Transaction
// =============================================================================

/// Where and when a transaction was included, as reported by the network
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionInfo {
    pub hash: Option<String>,
    pub height: Option<u64>,
    pub merkle_component_hash: Option<String>,
    pub aggregate_hash: Option<String>,
    pub index: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub network_type: NetworkType,
    pub version: u8,
    pub max_fee: u64,
    pub deadline: Deadline,
    pub signer: Option<PublicKey>,
    pub signature: Option<String>,
    pub body: TransactionBody,
    #[serde(skip)]
    pub info: Option<TransactionInfo>,
}

/// The part of a transaction covered by the signature
#[derive(Serialize)]
struct SigningView<'a> {
    network_type: NetworkType,
    version: u8,
    max_fee: u64,
    deadline: Deadline,
    signer: &'a PublicKey,
    body: &'a TransactionBody,
}

impl Transaction {
    /// Create an unsigned transaction
    pub fn new(
        network_type: NetworkType,
        deadline: Deadline,
        max_fee: u64,
        body: TransactionBody,
    ) -> Self {
        Self {
            network_type,
            version: TX_VERSION,
            max_fee,
            deadline,
            signer: None,
            signature: None,
            body,
            info: None,
        }
    }

    /// Wrap transactions, each paired with its signer, into an aggregate
    pub fn aggregate(
        network_type: NetworkType,
        deadline: Deadline,
        max_fee: u64,
        inner: Vec<InnerTransaction>,
        bonded: bool,
    ) -> Self {
        let body = AggregateBody::new(inner);
        let body = if bonded {
            TransactionBody::AggregateBonded(body)
        } else {
            TransactionBody::AggregateComplete(body)
        };
        Self::new(network_type, deadline, max_fee, body)
    }

    /// Embed this transaction's body in an aggregate on behalf of `signer`
    pub fn to_inner(&self, signer: PublicKey) -> InnerTransaction {
        InnerTransaction {
            signer,
            body: self.body.clone(),
        }
    }

    pub fn transaction_type(&self) -> TransactionType {
        self.body.transaction_type()
    }

    /// Hash reported by the network, if any
    pub fn hash(&self) -> Option<&str> {
        self.info.as_ref().and_then(|info| info.hash.as_deref())
    }

    pub fn height(&self) -> Option<u64> {
        self.info.as_ref().and_then(|info| info.height)
    }

    /// True for transactions fetched from the partial (unconfirmed) cache
    pub fn is_partial(&self) -> bool {
        self.transaction_type() == TransactionType::AggregateBonded && self.height().is_none()
    }

    fn signing_bytes(&self, signer: &PublicKey) -> Result<Vec<u8>, ModelError> {
        let mut body = self.body.clone();
        if let Some(aggregate) = body.aggregate_mut() {
            aggregate.cosignatures.clear();
        }
        let view = SigningView {
            network_type: self.network_type,
            version: self.version,
            max_fee: self.max_fee,
            deadline: self.deadline,
            signer,
            body: &body,
        };
        serde_json::to_vec(&view).map_err(|e| ModelError::Serialization(e.to_string()))
    }

    /// Compute the hash a transaction gets once signed
    pub fn compute_hash(
        signature: &[u8],
        signer: &PublicKey,
        generation_hash: &[u8],
        signing_bytes: &[u8],
    ) -> String {
        let r_part = &signature[..signature.len().min(32)];
        hex::encode_upper(sha3_256_parts(&[
            r_part,
            signer.as_bytes(),
            generation_hash,
            signing_bytes,
        ]))
    }

    /// Sign the transaction for the network identified by `generation_hash`
    pub fn sign_with(
        &self,
        key_pair: &KeyPair,
        generation_hash: &str,
    ) -> Result<SignedTransaction, ModelError> {
        let generation_hash = decode_generation_hash(generation_hash)?;
        let signer = key_pair.public_key();
        let data = self.signing_bytes(&signer)?;

        let mut message = Vec::with_capacity(generation_hash.len() + data.len());
        message.extend_from_slice(&generation_hash);
        message.extend_from_slice(&data);
        let signature = key_pair.sign(&message);

        let hash = Self::compute_hash(&signature, &signer, &generation_hash, &data);

        let mut signed = self.clone();
        signed.signer = Some(signer);
        signed.signature = Some(hex::encode_upper(signature));
        let payload = serde_json::to_vec(&signed)
            .map_err(|e| ModelError::Serialization(e.to_string()))?;

        log::debug!("Signed {} transaction {}", self.transaction_type(), hash);

        Ok(SignedTransaction {
            payload: hex::encode_upper(payload),
            hash,
            signer,
            transaction_type: self.transaction_type(),
            network_type: self.network_type,
        })
    }

    /// Verify the signature embedded in a signed transaction
    pub fn verify_signature(&self, generation_hash: &str) -> Result<bool, ModelError> {
        let (Some(signer), Some(signature)) = (&self.signer, &self.signature) else {
            return Ok(false);
        };
        let generation_hash = decode_generation_hash(generation_hash)?;
        let signature = hex::decode(signature).map_err(|_| ModelError::InvalidSignature)?;
        let mut message = generation_hash;
        message.extend_from_slice(&self.signing_bytes(signer)?);
        signer
            .verify(&message, &signature)
            .map_err(|_| ModelError::InvalidSignature)
    }
}

impl SignedTransaction {
    /// Decode the payload back into a transaction
    pub fn transaction(&self) -> Result<Transaction, ModelError> {
        let bytes = hex::decode(&self.payload).map_err(|e| ModelError::Serialization(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| ModelError::Serialization(e.to_string()))
    }
}

fn decode_generation_hash(generation_hash: &str) -> Result<Vec<u8>, ModelError> {
    let bytes = hex::decode(generation_hash)
        .map_err(|_| ModelError::InvalidGenerationHash(generation_hash.to_string()))?;
    if bytes.len() != 32 {
        return Err(ModelError::InvalidGenerationHash(
            generation_hash.to_string(),
        ));
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::address::Address;
    use crate::model::mosaic::{Mosaic, MosaicId};

    const GENERATION_HASH: &str =
        "57F7DA205008026C776CB6AED843393F04CD458E0AA2D9F1D5F31A402072B2D6";

    fn transfer(network: NetworkType) -> Transaction {
        let recipient = Address::from_public_key(&KeyPair::generate().public_key(), network);
        Transaction::new(
            network,
            Deadline(1_000),
            2_000,
            TransactionBody::Transfer(TransferBody {
                recipient,
                mosaics: vec![Mosaic::new(MosaicId(0x6BED913FA20223F8), 1_000_000)],
                message: Some("hello".to_string()),
            }),
        )
    }

    #[test]
    fn test_type_ids() {
        assert_eq!(TransactionType::Transfer.id(), 16724);
        assert_eq!(TransactionType::AggregateBonded.id(), 16961);
        assert_eq!(TransactionType::from_id(16705), TransactionType::AggregateComplete);
        assert_eq!(TransactionType::from_id(1), TransactionType::Other(1));
    }

    #[test]
    fn test_sign_and_verify() {
        let kp = KeyPair::generate();
        let tx = transfer(NetworkType::Testnet);
        let signed = tx.sign_with(&kp, GENERATION_HASH).unwrap();

        assert_eq!(signed.hash.len(), 64);
        assert_eq!(signed.signer, kp.public_key());

        let decoded = signed.transaction().unwrap();
        assert!(decoded.verify_signature(GENERATION_HASH).unwrap());
        assert_eq!(decoded.body, tx.body);
    }

    #[test]
    fn test_hash_depends_on_generation_hash() {
        let kp = KeyPair::generate();
        let tx = transfer(NetworkType::Testnet);
        let a = tx.sign_with(&kp, GENERATION_HASH).unwrap();
        let b = tx.sign_with(&kp, &"11".repeat(32)).unwrap();
        assert_ne!(a.hash, b.hash);
    }

    #[test]
    fn test_cosignatures_do_not_change_signing_bytes() {
        let kp = KeyPair::generate();
        let inner = transfer(NetworkType::Testnet).to_inner(kp.public_key());
        let aggregate = Transaction::aggregate(
            NetworkType::Testnet,
            Deadline(1_000),
            0,
            vec![inner],
            true,
        );
        let before = aggregate.signing_bytes(&kp.public_key()).unwrap();

        let mut cosigned = aggregate.clone();
        cosigned
            .body
            .aggregate_mut()
            .unwrap()
            .cosignatures
            .push(Cosignature {
                signer: KeyPair::generate().public_key(),
                signature: "00".repeat(64),
                version: 0,
            });
        assert_eq!(cosigned.signing_bytes(&kp.public_key()).unwrap(), before);
    }

    #[test]
    fn test_invalid_generation_hash() {
        let kp = KeyPair::generate();
        assert!(matches!(
            transfer(NetworkType::Testnet).sign_with(&kp, "abcd"),
            Err(ModelError::InvalidGenerationHash(_))
        ));
    }
}
