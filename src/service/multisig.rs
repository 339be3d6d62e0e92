//! Multisig lookups for the current profile

use std::sync::Arc;

use crate::crypto::PublicKey;
use crate::model::{Address, MultisigAccountInfo, NetworkType, PublicAccount};
use crate::repository::{MultisigRepository, RepositoryResult};

/// The multisig account a transaction is announced for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultisigSigner {
    pub account: PublicAccount,
    pub info: MultisigAccountInfo,
}

pub struct MultisigService {
    repository: Arc<dyn MultisigRepository>,
}

impl MultisigService {
    pub fn new(repository: Arc<dyn MultisigRepository>) -> Self {
        Self { repository }
    }

    /// The address itself followed by every multisig account it cosigns
    pub async fn self_and_children_addresses(
        &self,
        address: &Address,
    ) -> RepositoryResult<Vec<Address>> {
        let mut addresses = vec![*address];
        if let Some(info) = self.repository.multisig_info(address).await? {
            addresses.extend(
                info.multisig_addresses
                    .into_iter()
                    .filter(|child| child != address),
            );
        }
        log::debug!("Self and children addresses: {}", addresses.len());
        Ok(addresses)
    }

    /// Multisig info of the account behind `public_key`. `None` when the
    /// account is not a multisig.
    pub async fn signer_multisig_info(
        &self,
        public_key: &PublicKey,
        network_type: NetworkType,
    ) -> RepositoryResult<Option<MultisigSigner>> {
        let account = PublicAccount::new(*public_key, network_type);
        let info = self.repository.multisig_info(&account.address).await?;
        Ok(info
            .filter(MultisigAccountInfo::is_multisig)
            .map(|info| MultisigSigner { account, info }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testing::FakeNetwork;
    use crate::model::Account;

    #[tokio::test]
    async fn test_self_and_children() {
        let me = Account::generate(NetworkType::Testnet).address();
        let multisig_a = Account::generate(NetworkType::Testnet).address();
        let multisig_b = Account::generate(NetworkType::Testnet).address();
        let fake = FakeNetwork::default();
        fake.add_multisig(MultisigAccountInfo {
            account_address: me,
            min_approval: 0,
            min_removal: 0,
            cosignatory_addresses: vec![],
            multisig_addresses: vec![multisig_a, multisig_b],
        });

        let service = MultisigService::new(Arc::new(fake));
        assert_eq!(
            service.self_and_children_addresses(&me).await.unwrap(),
            vec![me, multisig_a, multisig_b]
        );
    }

    #[tokio::test]
    async fn test_no_multisig_entry() {
        let me = Account::generate(NetworkType::Testnet).address();
        let service = MultisigService::new(Arc::new(FakeNetwork::default()));
        assert_eq!(service.self_and_children_addresses(&me).await.unwrap(), vec![me]);

        let key = Account::generate(NetworkType::Testnet).public_key();
        assert_eq!(
            service
                .signer_multisig_info(&key, NetworkType::Testnet)
                .await
                .unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn test_signer_multisig_info() {
        let multisig = Account::generate(NetworkType::Testnet);
        let cosigner = Account::generate(NetworkType::Testnet).address();
        let fake = FakeNetwork::default();
        fake.add_multisig(MultisigAccountInfo {
            account_address: multisig.address(),
            min_approval: 2,
            min_removal: 1,
            cosignatory_addresses: vec![cosigner],
            multisig_addresses: vec![],
        });
        let service = MultisigService::new(Arc::new(fake));
        let signer = service
            .signer_multisig_info(&multisig.public_key(), NetworkType::Testnet)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(signer.account.address, multisig.address());
        assert!(signer.info.requires_bonded());
    }
}
