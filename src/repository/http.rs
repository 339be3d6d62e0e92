//! HTTP implementation of the repositories

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use std::time::Duration;
use url::Url;

use super::dto::{
    AccountInfoDto, AnnounceResponseDto, MetadataDto, MosaicInfoDto, MultisigDto,
    NamespaceInfoDto, NetworkPropertiesDto, NodeInfoDto, Page, ServerInfoDto,
    TransactionStatusDto, TransactionWithMetaDto,
};
use super::{
    AccountRepository, MetadataRepository, MosaicRepository, MultisigRepository,
    NamespaceRepository, NodeRepository, QueryParams, RepositoryError, RepositoryResult,
    TransactionRepository,
};
use crate::model::{
    AccountInfo, Address, CosignatureSignedTransaction, MetadataEntry, MetadataSearchCriteria,
    MosaicId, MosaicInfo, MultisigAccountInfo, NamespaceId, NetworkProperties, NodeInfo,
    ServerInfo, SignedTransaction, Transaction, TransactionStatus,
};

impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RepositoryError::Decode(err.to_string())
        } else {
            RepositoryError::Transport(err.to_string())
        }
    }
}

/// Client for a node's REST gateway
#[derive(Debug, Clone)]
pub struct RestClient {
    base_url: Url,
    client: Client,
}

impl RestClient {
    pub fn new(url: &str, timeout: Duration) -> RepositoryResult<Self> {
        let mut base_url =
            Url::parse(url).map_err(|e| RepositoryError::InvalidUrl(format!("{}: {}", url, e)))?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RepositoryError::Transport(format!("Could not create client: {}", e)))?;
        log::debug!("Created REST client for {}", base_url);
        Ok(Self { base_url, client })
    }

    pub fn url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> RepositoryResult<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| RepositoryError::InvalidUrl(format!("{}: {}", path, e)))
    }

    /// GET a document; `None` on 404
    async fn get_optional<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> RepositoryResult<Option<T>> {
        let url = self.endpoint(path)?;
        log::debug!("GET {} {:?}", url, query);
        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RepositoryError::Http {
                status: status.as_u16(),
                body,
            });
        }
        Ok(Some(response.json::<T>().await?))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> RepositoryResult<T> {
        self.get_optional(path, query)
            .await?
            .ok_or_else(|| RepositoryError::NotFound(path.to_string()))
    }

    async fn put_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> RepositoryResult<String> {
        let url = self.endpoint(path)?;
        log::debug!("PUT {}", url);
        let response = self.client.put(url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RepositoryError::Http {
                status: status.as_u16(),
                body,
            });
        }
        let announced: AnnounceResponseDto = response.json().await?;
        log::info!("{}", announced.message);
        Ok(announced.message)
    }

    async fn transaction_page(
        &self,
        group: &str,
        address: &Address,
        query: &QueryParams,
    ) -> RepositoryResult<Vec<Transaction>> {
        let mut params = query.to_pairs();
        params.push(("address", address.plain()));
        let page: Page<TransactionWithMetaDto> =
            self.get_json(&format!("transactions/{}", group), &params).await?;
        page.data.into_iter().map(Transaction::try_from).collect()
    }
}

#[async_trait]
impl NodeRepository for RestClient {
    async fn server_info(&self) -> RepositoryResult<ServerInfo> {
        let dto: ServerInfoDto = self.get_json("node/server", &[]).await?;
        Ok(dto.into())
    }

    async fn node_info(&self) -> RepositoryResult<NodeInfo> {
        let dto: NodeInfoDto = self.get_json("node/info", &[]).await?;
        Ok(dto.into())
    }

    async fn network_properties(&self) -> RepositoryResult<NetworkProperties> {
        let dto: NetworkPropertiesDto = self.get_json("network/properties", &[]).await?;
        dto.try_into()
    }
}

#[async_trait]
impl AccountRepository for RestClient {
    async fn account_info(&self, address: &Address) -> RepositoryResult<AccountInfo> {
        let dto: AccountInfoDto = self
            .get_json(&format!("accounts/{}", address.plain()), &[])
            .await?;
        dto.try_into()
    }

    async fn transactions(
        &self,
        address: &Address,
        query: &QueryParams,
    ) -> RepositoryResult<Vec<Transaction>> {
        self.transaction_page("confirmed", address, query).await
    }

    async fn partial_transactions(
        &self,
        address: &Address,
        query: &QueryParams,
    ) -> RepositoryResult<Vec<Transaction>> {
        self.transaction_page("partial", address, query).await
    }
}

#[async_trait]
impl MosaicRepository for RestClient {
    async fn mosaic_info(&self, id: MosaicId) -> RepositoryResult<Option<MosaicInfo>> {
        let dto: Option<MosaicInfoDto> =
            self.get_optional(&format!("mosaics/{}", id.to_hex()), &[]).await?;
        dto.map(MosaicInfo::try_from).transpose()
    }
}

#[async_trait]
impl NamespaceRepository for RestClient {
    async fn linked_mosaic_id(&self, id: NamespaceId) -> RepositoryResult<Option<MosaicId>> {
        let dto: Option<NamespaceInfoDto> = self
            .get_optional(&format!("namespaces/{}", id.to_hex()), &[])
            .await?;
        match dto {
            Some(dto) => dto.linked_mosaic_id(),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl MetadataRepository for RestClient {
    async fn search(
        &self,
        criteria: &MetadataSearchCriteria,
    ) -> RepositoryResult<Vec<MetadataEntry>> {
        let mut params = Vec::new();
        if let Some(address) = &criteria.source_address {
            params.push(("sourceAddress", address.plain()));
        }
        if let Some(address) = &criteria.target_address {
            params.push(("targetAddress", address.plain()));
        }
        if let Some(key) = criteria.scoped_metadata_key {
            params.push(("scopedMetadataKey", format!("{:016X}", key)));
        }
        if let Some(id) = criteria.target_id {
            params.push(("targetId", format!("{:016X}", id)));
        }
        if let Some(metadata_type) = criteria.metadata_type {
            params.push(("metadataType", metadata_type.id().to_string()));
        }
        let page: Page<MetadataDto> = self.get_json("metadata", &params).await?;
        page.data.into_iter().map(MetadataEntry::try_from).collect()
    }
}

#[async_trait]
impl MultisigRepository for RestClient {
    async fn multisig_info(
        &self,
        address: &Address,
    ) -> RepositoryResult<Option<MultisigAccountInfo>> {
        let dto: Option<MultisigDto> = self
            .get_optional(&format!("account/{}/multisig", address.plain()), &[])
            .await?;
        dto.map(MultisigAccountInfo::try_from).transpose()
    }
}

#[async_trait]
impl TransactionRepository for RestClient {
    async fn announce(&self, signed: &SignedTransaction) -> RepositoryResult<String> {
        self.put_json("transactions", &json!({ "payload": signed.payload }))
            .await
    }

    async fn announce_aggregate_bonded(
        &self,
        signed: &SignedTransaction,
    ) -> RepositoryResult<String> {
        self.put_json("transactions/partial", &json!({ "payload": signed.payload }))
            .await
    }

    async fn announce_cosignature(
        &self,
        cosignature: &CosignatureSignedTransaction,
    ) -> RepositoryResult<String> {
        self.put_json("transactions/cosignature", cosignature).await
    }

    async fn status(&self, hash: &str) -> RepositoryResult<TransactionStatus> {
        let dto: TransactionStatusDto = self
            .get_json(&format!("transactionStatus/{}", hash), &[])
            .await?;
        dto.try_into()
    }
}
