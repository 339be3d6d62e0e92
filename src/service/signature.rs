//! Transaction signing
//!
//! Decides how a batch of transactions is signed: one by one, wrapped in an
//! aggregate, or announced on behalf of a multisig account. Aggregate bonded
//! transactions always come with the hash lock that funds them.

use crate::model::transaction::{HashLockBody, InnerTransaction};
use crate::model::{
    Account, Deadline, NetworkCurrency, NetworkType, SignedTransaction, Transaction,
    TransactionBody,
};
use crate::profile::Profile;
use crate::settings::Settings;

use super::multisig::MultisigSigner;
use super::{ServiceError, ServiceResult};

/// What to sign and how
pub struct SignatureRequest<'a> {
    pub account: &'a Account,
    pub transactions: Vec<Transaction>,
    pub max_fee: u64,
    /// Announce on behalf of this multisig account
    pub multisig: Option<MultisigSigner>,
    pub is_aggregate: bool,
    pub is_aggregate_bonded: bool,
}

// =============================================================================
// Signature Service
// =============================================================================

pub struct TransactionSignatureService {
    network_type: NetworkType,
    generation_hash: String,
    epoch_adjustment: u64,
    deadline_hours: i64,
    network_currency: NetworkCurrency,
    hash_lock_amount: String,
    hash_lock_duration: u64,
}

impl TransactionSignatureService {
    pub fn new(profile: &Profile, settings: &Settings) -> Self {
        Self {
            network_type: profile.network_type(),
            generation_hash: profile.generation_hash().to_string(),
            epoch_adjustment: profile.epoch_adjustment(),
            deadline_hours: settings.deadline_hours,
            network_currency: profile.network_currency().clone(),
            hash_lock_amount: settings.hash_lock_amount.clone(),
            hash_lock_duration: settings.hash_lock_duration,
        }
    }

    pub fn network_type(&self) -> NetworkType {
        self.network_type
    }

    /// A fresh deadline for transactions signed now
    pub fn deadline(&self) -> Deadline {
        Deadline::create(self.epoch_adjustment, self.deadline_hours)
    }

    /// Sign the request. Hash locks are placed right before the aggregate
    /// bonded transaction they lock funds for.
    pub fn sign_transactions(
        &self,
        request: SignatureRequest<'_>,
    ) -> ServiceResult<Vec<SignedTransaction>> {
        if request.transactions.is_empty() {
            return Err(ServiceError::NoTransactions);
        }
        let account = request.account;

        if let Some(multisig) = &request.multisig {
            let bonded = multisig.info.requires_bonded();
            log::info!(
                "Signing for multisig {} ({} of {} cosignatures)",
                multisig.account.address,
                multisig.info.min_approval,
                multisig.info.cosignatory_addresses.len()
            );
            let aggregate =
                self.aggregate(&request.transactions, multisig, request.max_fee, bonded);
            return self.sign_aggregate(account, aggregate, request.max_fee, bonded);
        }

        if request.is_aggregate_bonded || request.is_aggregate {
            let bonded = request.is_aggregate_bonded;
            let inner = request
                .transactions
                .iter()
                .map(|tx| tx.to_inner(account.public_key()))
                .collect();
            let aggregate = Transaction::aggregate(
                self.network_type,
                self.deadline(),
                request.max_fee,
                inner,
                bonded,
            );
            return self.sign_aggregate(account, aggregate, request.max_fee, bonded);
        }

        request
            .transactions
            .into_iter()
            .map(|mut tx| {
                tx.max_fee = request.max_fee;
                Ok(account.sign(&tx, &self.generation_hash)?)
            })
            .collect()
    }

    fn aggregate(
        &self,
        transactions: &[Transaction],
        multisig: &MultisigSigner,
        max_fee: u64,
        bonded: bool,
    ) -> Transaction {
        let inner: Vec<InnerTransaction> = transactions
            .iter()
            .map(|tx| tx.to_inner(multisig.account.public_key))
            .collect();
        Transaction::aggregate(self.network_type, self.deadline(), max_fee, inner, bonded)
    }

    fn sign_aggregate(
        &self,
        account: &Account,
        aggregate: Transaction,
        max_fee: u64,
        bonded: bool,
    ) -> ServiceResult<Vec<SignedTransaction>> {
        let signed = account.sign(&aggregate, &self.generation_hash)?;
        if !bonded {
            return Ok(vec![signed]);
        }
        let lock = self.hash_lock(&signed, max_fee)?;
        Ok(vec![account.sign(&lock, &self.generation_hash)?, signed])
    }

    /// Lock `hash_lock_amount` of network currency for a bonded aggregate
    fn hash_lock(&self, bonded: &SignedTransaction, max_fee: u64) -> ServiceResult<Transaction> {
        let mosaic = self.network_currency.create_relative(&self.hash_lock_amount)?;
        log::debug!(
            "Hash lock of {} for {} blocks on {}",
            mosaic.amount,
            self.hash_lock_duration,
            bonded.hash
        );
        Ok(Transaction::new(
            self.network_type,
            self.deadline(),
            max_fee,
            TransactionBody::HashLock(HashLockBody {
                mosaic,
                duration: self.hash_lock_duration,
                hash: bonded.hash.clone(),
            }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::Password;
    use crate::model::transaction::TransferBody;
    use crate::model::{MultisigAccountInfo, PublicAccount, TransactionType};
    use crate::profile::profile::tests::network_settings;

    fn service() -> TransactionSignatureService {
        let account = Account::generate(NetworkType::Testnet);
        let profile = Profile::from_private_key(
            "alice",
            network_settings(NetworkType::Testnet),
            &account.private_key_hex(),
            &Password::new("password123"),
            true,
        )
        .unwrap();
        let settings = Settings::with_config_dir(std::path::Path::new("/tmp"));
        TransactionSignatureService::new(&profile, &settings)
    }

    fn transfer(service: &TransactionSignatureService) -> Transaction {
        let recipient = Account::generate(NetworkType::Testnet).address();
        Transaction::new(
            NetworkType::Testnet,
            service.deadline(),
            0,
            TransactionBody::Transfer(TransferBody {
                recipient,
                mosaics: vec![],
                message: Some("hi".to_string()),
            }),
        )
    }

    fn request<'a>(
        account: &'a Account,
        transactions: Vec<Transaction>,
    ) -> SignatureRequest<'a> {
        SignatureRequest {
            account,
            transactions,
            max_fee: 2_000,
            multisig: None,
            is_aggregate: false,
            is_aggregate_bonded: false,
        }
    }

    fn multisig(min_approval: u32) -> MultisigSigner {
        let key = Account::generate(NetworkType::Testnet).public_key();
        let account = PublicAccount::new(key, NetworkType::Testnet);
        MultisigSigner {
            account,
            info: MultisigAccountInfo {
                account_address: account.address,
                min_approval,
                min_removal: 1,
                cosignatory_addresses: vec![],
                multisig_addresses: vec![],
            },
        }
    }

    #[test]
    fn test_signs_each_transaction() {
        let service = service();
        let account = Account::generate(NetworkType::Testnet);
        let txs = vec![transfer(&service), transfer(&service)];
        let signed = service.sign_transactions(request(&account, txs)).unwrap();

        assert_eq!(signed.len(), 2);
        assert!(signed.iter().all(|s| s.transaction_type == TransactionType::Transfer));
        assert_eq!(signed[0].transaction().unwrap().max_fee, 2_000);
    }

    #[test]
    fn test_aggregate_complete() {
        let service = service();
        let account = Account::generate(NetworkType::Testnet);
        let mut req = request(&account, vec![transfer(&service)]);
        req.is_aggregate = true;
        let signed = service.sign_transactions(req).unwrap();

        assert_eq!(signed.len(), 1);
        assert_eq!(signed[0].transaction_type, TransactionType::AggregateComplete);
    }

    #[test]
    fn test_bonded_is_preceded_by_hash_lock() {
        let service = service();
        let account = Account::generate(NetworkType::Testnet);
        let mut req = request(&account, vec![transfer(&service)]);
        req.is_aggregate_bonded = true;
        let signed = service.sign_transactions(req).unwrap();

        assert_eq!(signed.len(), 2);
        assert!(signed[0].is_hash_lock());
        assert!(signed[1].is_aggregate_bonded());
        let lock = signed[0].transaction().unwrap();
        match lock.body {
            TransactionBody::HashLock(body) => {
                assert_eq!(body.hash, signed[1].hash);
                assert_eq!(body.mosaic.amount, 10_000_000);
                assert_eq!(body.duration, 480);
            }
            other => panic!("expected hash lock, got {:?}", other),
        }
    }

    #[test]
    fn test_multisig_needing_cosignatures_is_bonded() {
        let service = service();
        let account = Account::generate(NetworkType::Testnet);
        let signer = multisig(2);
        let multisig_key = signer.account.public_key;
        let mut req = request(&account, vec![transfer(&service)]);
        req.multisig = Some(signer);
        let signed = service.sign_transactions(req).unwrap();

        assert_eq!(signed.len(), 2);
        let bonded = signed[1].transaction().unwrap();
        assert_eq!(bonded.signer, Some(account.public_key()));
        let aggregate = bonded.body.aggregate().unwrap();
        assert_eq!(aggregate.inner[0].signer, multisig_key);
    }

    #[test]
    fn test_multisig_with_single_approval_is_complete() {
        let service = service();
        let account = Account::generate(NetworkType::Testnet);
        let mut req = request(&account, vec![transfer(&service)]);
        req.multisig = Some(multisig(1));
        req.is_aggregate_bonded = true;
        let signed = service.sign_transactions(req).unwrap();

        assert_eq!(signed.len(), 1);
        assert_eq!(signed[0].transaction_type, TransactionType::AggregateComplete);
    }

    #[test]
    fn test_nothing_to_sign() {
        let service = service();
        let account = Account::generate(NetworkType::Testnet);
        assert!(matches!(
            service.sign_transactions(request(&account, vec![])),
            Err(ServiceError::NoTransactions)
        ));
    }
}
