//! Accounts
//!
//! [`Account`] owns a private key and can sign; [`PublicAccount`] is the
//! public half used to address other parties.

use super::address::Address;
use super::mosaic::Mosaic;
use super::network::NetworkType;
use super::transaction::{CosignatureSignedTransaction, SignedTransaction, Transaction};
use super::ModelError;
use crate::crypto::{KeyPair, PublicKey};

/// Public key and derived address of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicAccount {
    pub public_key: PublicKey,
    pub address: Address,
}

impl PublicAccount {
    pub fn new(public_key: PublicKey, network_type: NetworkType) -> Self {
        Self {
            public_key,
            address: Address::from_public_key(&public_key, network_type),
        }
    }

    pub fn from_public_key_hex(hex_key: &str, network_type: NetworkType) -> Result<Self, ModelError> {
        Ok(Self::new(PublicKey::from_hex(hex_key)?, network_type))
    }

    pub fn network_type(&self) -> NetworkType {
        self.address.network_type()
    }
}

/// An account able to sign transactions
#[derive(Debug, Clone)]
pub struct Account {
    key_pair: KeyPair,
    network_type: NetworkType,
}

impl Account {
    pub fn new(key_pair: KeyPair, network_type: NetworkType) -> Self {
        Self {
            key_pair,
            network_type,
        }
    }

    /// Create a new account with a fresh key pair
    pub fn generate(network_type: NetworkType) -> Self {
        Self::new(KeyPair::generate(), network_type)
    }

    pub fn from_private_key(private_key: &str, network_type: NetworkType) -> Result<Self, ModelError> {
        Ok(Self::new(
            KeyPair::from_private_key_hex(private_key)?,
            network_type,
        ))
    }

    pub fn network_type(&self) -> NetworkType {
        self.network_type
    }

    pub fn public_key(&self) -> PublicKey {
        self.key_pair.public_key()
    }

    pub fn public_account(&self) -> PublicAccount {
        PublicAccount::new(self.public_key(), self.network_type)
    }

    pub fn address(&self) -> Address {
        self.public_account().address
    }

    /// WARNING: Keep this secret!
    pub fn private_key_hex(&self) -> String {
        self.key_pair.private_key_hex()
    }

    pub fn key_pair(&self) -> &KeyPair {
        &self.key_pair
    }

    pub fn sign(
        &self,
        transaction: &Transaction,
        generation_hash: &str,
    ) -> Result<SignedTransaction, ModelError> {
        transaction.sign_with(&self.key_pair, generation_hash)
    }

    /// Cosign a transaction by its hash
    pub fn sign_cosignature(&self, parent_hash: &str) -> Result<CosignatureSignedTransaction, ModelError> {
        let hash = hex::decode(parent_hash)
            .ok()
            .filter(|bytes| bytes.len() == 32)
            .ok_or_else(|| ModelError::InvalidHash(parent_hash.to_string()))?;
        let signature = self.key_pair.sign(&hash);
        Ok(CosignatureSignedTransaction {
            parent_hash: parent_hash.to_ascii_uppercase(),
            signature: hex::encode_upper(signature),
            signer_public_key: self.public_key(),
            version: 0,
        })
    }

    /// Cosign an aggregate transaction fetched from the network
    pub fn sign_cosignature_transaction(
        &self,
        transaction: &Transaction,
    ) -> Result<CosignatureSignedTransaction, ModelError> {
        if !transaction.transaction_type().is_aggregate() {
            return Err(ModelError::NotAggregate);
        }
        let hash = transaction.hash().ok_or(ModelError::MissingHash)?;
        self.sign_cosignature(hash)
    }
}

/// Account state as reported by the network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountInfo {
    pub address: Address,
    pub address_height: u64,
    pub public_key: Option<PublicKey>,
    pub public_key_height: u64,
    pub importance: u64,
    pub mosaics: Vec<Mosaic>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::deadline::Deadline;
    use crate::model::transaction::{AggregateBody, TransactionBody, TransactionInfo};

    #[test]
    fn test_account_address_matches_public_account() {
        let account = Account::generate(NetworkType::Testnet);
        assert_eq!(account.address(), account.public_account().address);
        assert_eq!(account.public_account().network_type(), NetworkType::Testnet);
    }

    #[test]
    fn test_import_private_key() {
        let account = Account::generate(NetworkType::Mainnet);
        let imported =
            Account::from_private_key(&account.private_key_hex(), NetworkType::Mainnet).unwrap();
        assert_eq!(imported.address(), account.address());
    }

    #[test]
    fn test_sign_cosignature() {
        let account = Account::generate(NetworkType::Testnet);
        let hash = "ab".repeat(32);
        let cosignature = account.sign_cosignature(&hash).unwrap();
        assert_eq!(cosignature.parent_hash, hash.to_ascii_uppercase());
        assert!(cosignature.verify());
        assert!(account.sign_cosignature("abcd").is_err());
    }

    #[test]
    fn test_cosign_transaction_requires_aggregate_with_hash() {
        let account = Account::generate(NetworkType::Testnet);
        let mut tx = Transaction::new(
            NetworkType::Testnet,
            Deadline(1),
            0,
            TransactionBody::AggregateBonded(AggregateBody::default()),
        );
        assert!(matches!(
            account.sign_cosignature_transaction(&tx),
            Err(ModelError::MissingHash)
        ));

        tx.info = Some(TransactionInfo {
            hash: Some("CD".repeat(32)),
            ..Default::default()
        });
        assert!(account.sign_cosignature_transaction(&tx).unwrap().verify());

        tx.body = TransactionBody::Unknown { type_id: 1 };
        assert!(matches!(
            account.sign_cosignature_transaction(&tx),
            Err(ModelError::NotAggregate)
        ));
    }
}
