//! In-memory network used by service and command tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::model::{
    AccountInfo, Address, CosignatureSignedTransaction, MetadataEntry, MetadataSearchCriteria,
    MosaicId, MosaicInfo, MultisigAccountInfo, NamespaceId, NetworkProperties, NodeInfo,
    ServerInfo, SignedTransaction, Transaction, TransactionGroup, TransactionStatus,
};
use crate::repository::{
    AccountRepository, MetadataRepository, MosaicRepository, MultisigRepository,
    NamespaceRepository, NodeRepository, QueryParams, Repositories, RepositoryError,
    RepositoryResult, TransactionRepository,
};

#[derive(Default)]
pub struct FakeState {
    pub multisig: HashMap<Address, MultisigAccountInfo>,
    pub confirmed: HashMap<Address, Vec<Transaction>>,
    pub partial: HashMap<Address, Vec<Transaction>>,
    pub partial_calls: Vec<Address>,
    pub accounts: HashMap<Address, AccountInfo>,
    pub mosaics: HashMap<MosaicId, MosaicInfo>,
    pub namespaces: HashMap<NamespaceId, MosaicId>,
    pub metadata: Vec<MetadataEntry>,
    /// `(endpoint, hash)` in announce order
    pub announced: Vec<(&'static str, String)>,
    pub cosignatures: Vec<CosignatureSignedTransaction>,
    /// Statuses reported per hash; unknown hashes report confirmed
    pub statuses: HashMap<String, TransactionStatus>,
    pub fail_announce: bool,
}

#[derive(Clone, Default)]
pub struct FakeNetwork {
    state: Arc<Mutex<FakeState>>,
}

impl FakeNetwork {
    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    pub fn add_multisig(&self, info: MultisigAccountInfo) {
        self.state().multisig.insert(info.account_address, info);
    }

    pub fn add_partial(&self, address: Address, transaction: Transaction) {
        self.state().partial.entry(address).or_default().push(transaction);
    }

    pub fn repositories(&self) -> Repositories {
        let fake = Arc::new(self.clone());
        Repositories {
            node: fake.clone(),
            account: fake.clone(),
            mosaic: fake.clone(),
            namespace: fake.clone(),
            metadata: fake.clone(),
            multisig: fake.clone(),
            transaction: fake,
        }
    }

    fn record(&self, endpoint: &'static str, hash: &str) -> RepositoryResult<String> {
        let mut state = self.state();
        if state.fail_announce {
            return Err(RepositoryError::Http {
                status: 409,
                body: "rejected".to_string(),
            });
        }
        state.announced.push((endpoint, hash.to_string()));
        Ok(format!("packet pushed to the network via {}", endpoint))
    }
}

#[async_trait]
impl NodeRepository for FakeNetwork {
    async fn server_info(&self) -> RepositoryResult<ServerInfo> {
        Ok(ServerInfo {
            rest_version: "2.4.0".to_string(),
            sdk_version: "2.4.1".to_string(),
        })
    }

    async fn node_info(&self) -> RepositoryResult<NodeInfo> {
        Ok(NodeInfo {
            public_key: "00".repeat(32),
            network_generation_hash_seed:
                "57F7DA205008026C776CB6AED843393F04CD458E0AA2D9F1D5F31A402072B2D6".to_string(),
            network_type: Some(crate::model::NetworkType::Testnet),
            friendly_name: "fake".to_string(),
            host: "localhost".to_string(),
            port: 7900,
        })
    }

    async fn network_properties(&self) -> RepositoryResult<NetworkProperties> {
        Ok(NetworkProperties {
            epoch_adjustment: 1_615_853_185,
            currency_mosaic_id: Some(MosaicId(0x091F837E059AE13C)),
        })
    }
}

#[async_trait]
impl AccountRepository for FakeNetwork {
    async fn account_info(&self, address: &Address) -> RepositoryResult<AccountInfo> {
        self.state()
            .accounts
            .get(address)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(address.plain()))
    }

    async fn transactions(
        &self,
        address: &Address,
        _query: &QueryParams,
    ) -> RepositoryResult<Vec<Transaction>> {
        Ok(self.state().confirmed.get(address).cloned().unwrap_or_default())
    }

    async fn partial_transactions(
        &self,
        address: &Address,
        _query: &QueryParams,
    ) -> RepositoryResult<Vec<Transaction>> {
        let mut state = self.state();
        state.partial_calls.push(*address);
        Ok(state.partial.get(address).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl MosaicRepository for FakeNetwork {
    async fn mosaic_info(&self, id: MosaicId) -> RepositoryResult<Option<MosaicInfo>> {
        Ok(self.state().mosaics.get(&id).cloned())
    }
}

#[async_trait]
impl NamespaceRepository for FakeNetwork {
    async fn linked_mosaic_id(&self, id: NamespaceId) -> RepositoryResult<Option<MosaicId>> {
        Ok(self.state().namespaces.get(&id).copied())
    }
}

#[async_trait]
impl MetadataRepository for FakeNetwork {
    async fn search(
        &self,
        criteria: &MetadataSearchCriteria,
    ) -> RepositoryResult<Vec<MetadataEntry>> {
        Ok(self
            .state()
            .metadata
            .iter()
            .filter(|e| criteria.source_address.map_or(true, |a| a == e.source_address))
            .filter(|e| criteria.target_address.map_or(true, |a| a == e.target_address))
            .filter(|e| criteria.scoped_metadata_key.map_or(true, |k| k == e.scoped_metadata_key))
            .filter(|e| criteria.target_id.map_or(true, |id| Some(id) == e.target_id))
            .filter(|e| criteria.metadata_type.map_or(true, |t| t == e.metadata_type))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl MultisigRepository for FakeNetwork {
    async fn multisig_info(
        &self,
        address: &Address,
    ) -> RepositoryResult<Option<MultisigAccountInfo>> {
        Ok(self.state().multisig.get(address).cloned())
    }
}

#[async_trait]
impl TransactionRepository for FakeNetwork {
    async fn announce(&self, signed: &SignedTransaction) -> RepositoryResult<String> {
        self.record("/transactions", &signed.hash)
    }

    async fn announce_aggregate_bonded(
        &self,
        signed: &SignedTransaction,
    ) -> RepositoryResult<String> {
        self.record("/transactions/partial", &signed.hash)
    }

    async fn announce_cosignature(
        &self,
        cosignature: &CosignatureSignedTransaction,
    ) -> RepositoryResult<String> {
        let message = self.record("/transactions/cosignature", &cosignature.parent_hash)?;
        self.state().cosignatures.push(cosignature.clone());
        Ok(message)
    }

    async fn status(&self, hash: &str) -> RepositoryResult<TransactionStatus> {
        Ok(self
            .state()
            .statuses
            .get(hash)
            .cloned()
            .unwrap_or_else(|| TransactionStatus {
                group: TransactionGroup::Confirmed,
                code: "Success".to_string(),
                hash: hash.to_string(),
                deadline: None,
                height: Some(10),
            }))
    }
}
