//! Gateway JSON documents and their conversion into model types
//!
//! The gateway encodes 64-bit numbers as decimal strings, ids as hex and
//! addresses as 48 character hex.

use serde::Deserialize;

use super::RepositoryError;
use crate::crypto::PublicKey;
use crate::model::mosaic::MAX_DIVISIBILITY;
use crate::model::transaction::{
    AccountMosaicRestrictionBody, AggregateBody, Cosignature, HashLockBody, HashType,
    InnerTransaction, MetadataBody, SecretLockBody, TransferBody,
};
use crate::model::{
    parse_u64_hex, AccountInfo, AccountRestrictionFlags, Address, Deadline, MetadataEntry,
    MetadataType, Mosaic, MosaicFlags, MosaicId, MosaicInfo, MultisigAccountInfo,
    NetworkProperties, NetworkType, NodeInfo, ServerInfo, Transaction, TransactionBody,
    TransactionGroup, TransactionInfo, TransactionStatus, TransactionType, UnresolvedMosaicId,
};

type DecodeResult<T> = Result<T, RepositoryError>;

fn decode_err(what: &str, value: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::Decode(format!("{}: {}", what, value))
}

fn parse_u64(what: &str, value: &str) -> DecodeResult<u64> {
    value.parse().map_err(|_| decode_err(what, value))
}

fn parse_opt_u64(what: &str, value: Option<&str>) -> DecodeResult<u64> {
    value.map_or(Ok(0), |v| parse_u64(what, v))
}

fn parse_address(value: &str) -> DecodeResult<Address> {
    Address::parse(value).map_err(|e| decode_err("address", e))
}

fn parse_public_key(value: &str) -> DecodeResult<PublicKey> {
    PublicKey::from_hex(value).map_err(|e| decode_err("public key", e))
}

fn parse_mosaic_id(value: &str) -> DecodeResult<MosaicId> {
    MosaicId::from_hex(value).map_err(|e| decode_err("mosaic id", e))
}

fn parse_unresolved_id(value: &str) -> DecodeResult<UnresolvedMosaicId> {
    parse_u64_hex(value)
        .map(UnresolvedMosaicId::from_u64)
        .map_err(|e| decode_err("mosaic id", e))
}

fn require<'a>(field: &str, value: &'a Option<String>) -> DecodeResult<&'a str> {
    value
        .as_deref()
        .ok_or_else(|| RepositoryError::Decode(format!("missing field {}", field)))
}

// =============================================================================
// Node
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfoDto {
    pub server_info: ServerInfoInner,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfoInner {
    pub rest_version: String,
    pub sdk_version: String,
}

impl From<ServerInfoDto> for ServerInfo {
    fn from(dto: ServerInfoDto) -> Self {
        ServerInfo {
            rest_version: dto.server_info.rest_version,
            sdk_version: dto.server_info.sdk_version,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInfoDto {
    pub public_key: String,
    pub network_generation_hash_seed: String,
    pub network_identifier: u8,
    #[serde(default)]
    pub friendly_name: String,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub port: u16,
}

impl From<NodeInfoDto> for NodeInfo {
    fn from(dto: NodeInfoDto) -> Self {
        NodeInfo {
            public_key: dto.public_key,
            network_generation_hash_seed: dto.network_generation_hash_seed,
            network_type: NetworkType::from_id(dto.network_identifier),
            friendly_name: dto.friendly_name,
            host: dto.host,
            port: dto.port,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NetworkPropertiesDto {
    pub network: NetworkSection,
    pub chain: ChainSection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSection {
    /// e.g. `1615853185s`
    pub epoch_adjustment: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainSection {
    /// e.g. `0x091F'837E'059A'E13C`
    pub currency_mosaic_id: Option<String>,
}

impl TryFrom<NetworkPropertiesDto> for NetworkProperties {
    type Error = RepositoryError;

    fn try_from(dto: NetworkPropertiesDto) -> DecodeResult<Self> {
        let epoch_adjustment = match dto.network.epoch_adjustment.as_deref() {
            Some(raw) => parse_u64("epoch adjustment", raw.trim_end_matches('s'))?,
            None => 0,
        };
        let currency_mosaic_id = dto
            .chain
            .currency_mosaic_id
            .as_deref()
            .map(parse_mosaic_id)
            .transpose()?;
        Ok(NetworkProperties {
            epoch_adjustment,
            currency_mosaic_id,
        })
    }
}

// =============================================================================
// Accounts
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct MosaicDto {
    pub id: String,
    pub amount: String,
}

impl TryFrom<&MosaicDto> for Mosaic {
    type Error = RepositoryError;

    fn try_from(dto: &MosaicDto) -> DecodeResult<Self> {
        Ok(Mosaic {
            id: parse_unresolved_id(&dto.id)?,
            amount: parse_u64("amount", &dto.amount)?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct AccountInfoDto {
    pub account: AccountDto,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub address: String,
    pub address_height: String,
    pub public_key: String,
    pub public_key_height: String,
    #[serde(default)]
    pub importance: Option<String>,
    #[serde(default)]
    pub mosaics: Vec<MosaicDto>,
}

impl TryFrom<AccountInfoDto> for AccountInfo {
    type Error = RepositoryError;

    fn try_from(dto: AccountInfoDto) -> DecodeResult<Self> {
        let account = dto.account;
        // Accounts that never announced report an all-zero public key
        let public_key = if account.public_key.chars().all(|c| c == '0') {
            None
        } else {
            Some(parse_public_key(&account.public_key)?)
        };
        Ok(AccountInfo {
            address: parse_address(&account.address)?,
            address_height: parse_u64("address height", &account.address_height)?,
            public_key,
            public_key_height: parse_u64("public key height", &account.public_key_height)?,
            importance: parse_opt_u64("importance", account.importance.as_deref())?,
            mosaics: account
                .mosaics
                .iter()
                .map(Mosaic::try_from)
                .collect::<DecodeResult<_>>()?,
        })
    }
}

// =============================================================================
// Mosaics, namespaces, metadata, multisig
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct MosaicInfoDto {
    pub mosaic: MosaicInfoInner,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MosaicInfoInner {
    pub id: String,
    pub supply: String,
    pub start_height: String,
    pub owner_address: String,
    pub revision: u32,
    pub flags: u8,
    pub divisibility: u8,
    pub duration: String,
}

impl TryFrom<MosaicInfoDto> for MosaicInfo {
    type Error = RepositoryError;

    fn try_from(dto: MosaicInfoDto) -> DecodeResult<Self> {
        let m = dto.mosaic;
        if m.divisibility > MAX_DIVISIBILITY {
            return Err(RepositoryError::Decode(format!(
                "Invalid divisibility: {}",
                m.divisibility
            )));
        }
        Ok(MosaicInfo {
            id: parse_mosaic_id(&m.id)?,
            supply: parse_u64("supply", &m.supply)?,
            start_height: parse_u64("start height", &m.start_height)?,
            owner_address: parse_address(&m.owner_address)?,
            revision: m.revision,
            flags: MosaicFlags::from_bits_truncate(m.flags),
            divisibility: m.divisibility,
            duration: parse_u64("duration", &m.duration)?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct NamespaceInfoDto {
    pub namespace: NamespaceInner,
}

#[derive(Debug, Deserialize)]
pub struct NamespaceInner {
    pub alias: AliasDto,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasDto {
    /// 0 none, 1 mosaic, 2 address
    #[serde(rename = "type")]
    pub alias_type: u8,
    pub mosaic_id: Option<String>,
}

impl NamespaceInfoDto {
    pub fn linked_mosaic_id(&self) -> DecodeResult<Option<MosaicId>> {
        match (self.namespace.alias.alias_type, &self.namespace.alias.mosaic_id) {
            (1, Some(id)) => parse_mosaic_id(id).map(Some),
            _ => Ok(None),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataDto {
    pub metadata_entry: MetadataEntryDto,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataEntryDto {
    pub source_address: String,
    pub target_address: String,
    pub scoped_metadata_key: String,
    #[serde(default)]
    pub target_id: Option<String>,
    pub metadata_type: u8,
    #[serde(default)]
    pub value: String,
}

impl TryFrom<MetadataDto> for MetadataEntry {
    type Error = RepositoryError;

    fn try_from(dto: MetadataDto) -> DecodeResult<Self> {
        let entry = dto.metadata_entry;
        let target_id = match entry.target_id.as_deref() {
            Some(id) => Some(parse_u64_hex(id).map_err(|e| decode_err("target id", e))?),
            None => None,
        };
        Ok(MetadataEntry {
            source_address: parse_address(&entry.source_address)?,
            target_address: parse_address(&entry.target_address)?,
            scoped_metadata_key: parse_u64_hex(&entry.scoped_metadata_key)
                .map_err(|e| decode_err("metadata key", e))?,
            target_id: target_id.filter(|id| *id != 0),
            metadata_type: MetadataType::from_id(entry.metadata_type)
                .ok_or_else(|| decode_err("metadata type", entry.metadata_type))?,
            value: hex::decode(&entry.value).map_err(|e| decode_err("metadata value", e))?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct MultisigDto {
    pub multisig: MultisigInner,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultisigInner {
    pub account_address: String,
    pub min_approval: u32,
    pub min_removal: u32,
    #[serde(default)]
    pub cosignatory_addresses: Vec<String>,
    #[serde(default)]
    pub multisig_addresses: Vec<String>,
}

impl TryFrom<MultisigDto> for MultisigAccountInfo {
    type Error = RepositoryError;

    fn try_from(dto: MultisigDto) -> DecodeResult<Self> {
        let m = dto.multisig;
        Ok(MultisigAccountInfo {
            account_address: parse_address(&m.account_address)?,
            min_approval: m.min_approval,
            min_removal: m.min_removal,
            cosignatory_addresses: m
                .cosignatory_addresses
                .iter()
                .map(|a| parse_address(a))
                .collect::<DecodeResult<_>>()?,
            multisig_addresses: m
                .multisig_addresses
                .iter()
                .map(|a| parse_address(a))
                .collect::<DecodeResult<_>>()?,
        })
    }
}

// =============================================================================
// Transactions
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStatusDto {
    pub group: String,
    pub code: String,
    pub hash: String,
    pub deadline: Option<String>,
    pub height: Option<String>,
}

impl TryFrom<TransactionStatusDto> for TransactionStatus {
    type Error = RepositoryError;

    fn try_from(dto: TransactionStatusDto) -> DecodeResult<Self> {
        Ok(TransactionStatus {
            group: TransactionGroup::parse(&dto.group)
                .ok_or_else(|| decode_err("transaction group", &dto.group))?,
            code: dto.code,
            hash: dto.hash,
            deadline: dto.deadline.as_deref().map(|d| parse_u64("deadline", d)).transpose()?,
            height: dto.height.as_deref().map(|h| parse_u64("height", h)).transpose()?,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnounceResponseDto {
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaDto {
    pub hash: Option<String>,
    pub height: Option<String>,
    pub merkle_component_hash: Option<String>,
    pub aggregate_hash: Option<String>,
    pub index: Option<u32>,
}

impl TryFrom<&MetaDto> for TransactionInfo {
    type Error = RepositoryError;

    fn try_from(meta: &MetaDto) -> DecodeResult<Self> {
        // Partial transactions report height 0
        let height = meta
            .height
            .as_deref()
            .map(|h| parse_u64("height", h))
            .transpose()?
            .filter(|h| *h != 0);
        Ok(TransactionInfo {
            hash: meta.hash.clone(),
            height,
            merkle_component_hash: meta.merkle_component_hash.clone(),
            aggregate_hash: meta.aggregate_hash.clone(),
            index: meta.index,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct TransactionWithMetaDto {
    #[serde(default)]
    pub meta: MetaDto,
    pub transaction: TransactionDto,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosignatureDto {
    #[serde(default, with = "crate::model::transaction::signed::u64_string")]
    pub version: u64,
    pub signer_public_key: String,
    pub signature: String,
}

/// Every transaction type shares one flat document; type specific fields
/// are optional
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDto {
    pub signature: Option<String>,
    pub signer_public_key: String,
    pub version: u8,
    pub network: u8,
    #[serde(rename = "type")]
    pub type_id: u16,
    pub max_fee: Option<String>,
    pub deadline: Option<String>,

    pub recipient_address: Option<String>,
    #[serde(default)]
    pub mosaics: Vec<MosaicDto>,
    pub message: Option<String>,

    pub mosaic_id: Option<String>,
    pub amount: Option<String>,
    pub duration: Option<String>,
    pub hash: Option<String>,
    pub secret: Option<String>,
    pub hash_algorithm: Option<u8>,

    pub target_address: Option<String>,
    pub scoped_metadata_key: Option<String>,
    pub target_mosaic_id: Option<String>,
    pub value_size_delta: Option<i16>,
    pub value: Option<String>,

    pub restriction_flags: Option<u16>,
    #[serde(default)]
    pub restriction_additions: Vec<String>,
    #[serde(default)]
    pub restriction_deletions: Vec<String>,

    #[serde(default)]
    pub transactions: Vec<TransactionWithMetaDto>,
    #[serde(default)]
    pub cosignatures: Vec<CosignatureDto>,
}

/// Transfer messages start with a type byte; 0 is plain text
fn decode_message(raw: &str) -> String {
    match hex::decode(raw) {
        Ok(bytes) if bytes.first() == Some(&0) => String::from_utf8_lossy(&bytes[1..]).into_owned(),
        Ok(bytes) if bytes.is_empty() => String::new(),
        _ => raw.to_string(),
    }
}

impl TransactionDto {
    fn mosaic(&self) -> DecodeResult<Mosaic> {
        Ok(Mosaic {
            id: parse_unresolved_id(require("mosaicId", &self.mosaic_id)?)?,
            amount: parse_u64("amount", require("amount", &self.amount)?)?,
        })
    }

    fn metadata(&self) -> DecodeResult<MetadataBody> {
        let target_id = self
            .target_mosaic_id
            .as_deref()
            .map(parse_unresolved_id)
            .transpose()?;
        Ok(MetadataBody {
            target_address: parse_address(require("targetAddress", &self.target_address)?)?,
            scoped_metadata_key: parse_u64_hex(require(
                "scopedMetadataKey",
                &self.scoped_metadata_key,
            )?)
            .map_err(|e| decode_err("metadata key", e))?,
            target_id,
            value_size_delta: self.value_size_delta.unwrap_or(0),
            value: hex::decode(self.value.as_deref().unwrap_or(""))
                .map_err(|e| decode_err("metadata value", e))?,
        })
    }

    fn aggregate(&self) -> DecodeResult<AggregateBody> {
        let inner = self
            .transactions
            .iter()
            .map(|embedded| {
                Ok(InnerTransaction {
                    signer: parse_public_key(&embedded.transaction.signer_public_key)?,
                    body: embedded.transaction.body(),
                })
            })
            .collect::<DecodeResult<_>>()?;
        let cosignatures = self
            .cosignatures
            .iter()
            .map(|c| {
                Ok(Cosignature {
                    signer: parse_public_key(&c.signer_public_key)?,
                    signature: c.signature.clone(),
                    version: c.version,
                })
            })
            .collect::<DecodeResult<_>>()?;
        Ok(AggregateBody {
            inner,
            cosignatures,
        })
    }

    fn try_body(&self) -> DecodeResult<TransactionBody> {
        let body = match TransactionType::from_id(self.type_id) {
            TransactionType::Transfer => TransactionBody::Transfer(TransferBody {
                recipient: parse_address(require("recipientAddress", &self.recipient_address)?)?,
                mosaics: self
                    .mosaics
                    .iter()
                    .map(Mosaic::try_from)
                    .collect::<DecodeResult<_>>()?,
                message: self.message.as_deref().map(decode_message),
            }),
            TransactionType::HashLock => TransactionBody::HashLock(HashLockBody {
                mosaic: self.mosaic()?,
                duration: parse_u64("duration", require("duration", &self.duration)?)?,
                hash: require("hash", &self.hash)?.to_string(),
            }),
            TransactionType::SecretLock => TransactionBody::SecretLock(SecretLockBody {
                recipient: parse_address(require("recipientAddress", &self.recipient_address)?)?,
                mosaic: self.mosaic()?,
                duration: parse_u64("duration", require("duration", &self.duration)?)?,
                hash_type: self
                    .hash_algorithm
                    .and_then(HashType::from_id)
                    .ok_or_else(|| decode_err("hash algorithm", format!("{:?}", self.hash_algorithm)))?,
                secret: require("secret", &self.secret)?.to_string(),
            }),
            TransactionType::AccountMetadata => TransactionBody::AccountMetadata(self.metadata()?),
            TransactionType::MosaicMetadata => TransactionBody::MosaicMetadata(self.metadata()?),
            TransactionType::AccountMosaicRestriction => {
                let flags = self
                    .restriction_flags
                    .ok_or_else(|| decode_err("restriction flags", "missing"))?;
                TransactionBody::AccountMosaicRestriction(AccountMosaicRestrictionBody {
                    flags: AccountRestrictionFlags::from_bits_retain(flags),
                    additions: self
                        .restriction_additions
                        .iter()
                        .map(|id| parse_unresolved_id(id))
                        .collect::<DecodeResult<_>>()?,
                    deletions: self
                        .restriction_deletions
                        .iter()
                        .map(|id| parse_unresolved_id(id))
                        .collect::<DecodeResult<_>>()?,
                })
            }
            TransactionType::AggregateComplete => {
                TransactionBody::AggregateComplete(self.aggregate()?)
            }
            TransactionType::AggregateBonded => TransactionBody::AggregateBonded(self.aggregate()?),
            TransactionType::Other(type_id) => TransactionBody::Unknown { type_id },
        };
        Ok(body)
    }

    /// Decode the body; anything the client cannot represent is kept as
    /// [`TransactionBody::Unknown`]
    pub fn body(&self) -> TransactionBody {
        self.try_body().unwrap_or_else(|e| {
            log::warn!("Cannot decode transaction of type {:#06x}: {}", self.type_id, e);
            TransactionBody::Unknown {
                type_id: self.type_id,
            }
        })
    }
}

impl TryFrom<TransactionWithMetaDto> for Transaction {
    type Error = RepositoryError;

    fn try_from(dto: TransactionWithMetaDto) -> DecodeResult<Self> {
        let tx = &dto.transaction;
        let network_type = NetworkType::from_id(tx.network)
            .ok_or_else(|| decode_err("network", tx.network))?;
        Ok(Transaction {
            network_type,
            version: tx.version,
            max_fee: parse_opt_u64("max fee", tx.max_fee.as_deref())?,
            deadline: Deadline(parse_opt_u64("deadline", tx.deadline.as_deref())?),
            signer: Some(parse_public_key(&tx.signer_public_key)?),
            signature: tx.signature.clone(),
            body: tx.body(),
            info: Some(TransactionInfo::try_from(&dto.meta)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::KeyPair;
    use serde_json::json;

    #[test]
    fn test_decode_aggregate_bonded() {
        let signer = KeyPair::generate().public_key();
        let recipient = Address::from_public_key(&signer, NetworkType::Testnet);
        let doc = json!({
            "meta": { "hash": "AB".repeat(32), "height": "0", "index": 0 },
            "transaction": {
                "signerPublicKey": signer.to_hex(),
                "version": 1,
                "network": 152,
                "type": 16961,
                "maxFee": "20000",
                "deadline": "12345",
                "transactions": [{
                    "meta": {},
                    "transaction": {
                        "signerPublicKey": signer.to_hex(),
                        "version": 1,
                        "network": 152,
                        "type": 16724,
                        "recipientAddress": recipient.to_hex(),
                        "mosaics": [{ "id": "091F837E059AE13C", "amount": "1000000" }],
                        "message": "0068656C6C6F"
                    }
                }],
                "cosignatures": [{
                    "version": "0",
                    "signerPublicKey": signer.to_hex(),
                    "signature": "00".repeat(64)
                }]
            }
        });

        let dto: TransactionWithMetaDto = serde_json::from_value(doc).unwrap();
        let tx = Transaction::try_from(dto).unwrap();
        assert_eq!(tx.transaction_type(), TransactionType::AggregateBonded);
        assert_eq!(tx.hash(), Some("AB".repeat(32).as_str()));
        assert!(tx.is_partial());
        assert_eq!(tx.max_fee, 20_000);

        let aggregate = tx.body.aggregate().unwrap();
        assert!(aggregate.is_cosigned_by(&signer));
        match &aggregate.inner[0].body {
            TransactionBody::Transfer(transfer) => {
                assert_eq!(transfer.recipient, recipient);
                assert_eq!(transfer.message.as_deref(), Some("hello"));
                assert_eq!(transfer.mosaics[0].amount, 1_000_000);
            }
            other => panic!("unexpected body {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_type_kept_as_unknown() {
        let signer = KeyPair::generate().public_key();
        let doc = json!({
            "transaction": {
                "signerPublicKey": signer.to_hex(),
                "version": 1,
                "network": 152,
                "type": 16718
            }
        });
        let dto: TransactionWithMetaDto = serde_json::from_value(doc).unwrap();
        let tx = Transaction::try_from(dto).unwrap();
        assert_eq!(tx.body, TransactionBody::Unknown { type_id: 16718 });
    }

    #[test]
    fn test_broken_body_kept_as_unknown() {
        let signer = KeyPair::generate().public_key();
        let doc = json!({
            "transaction": {
                "signerPublicKey": signer.to_hex(),
                "version": 1,
                "network": 152,
                "type": 16724
            }
        });
        let dto: TransactionWithMetaDto = serde_json::from_value(doc).unwrap();
        assert_eq!(dto.transaction.body(), TransactionBody::Unknown { type_id: 16724 });
    }

    #[test]
    fn test_network_properties() {
        let dto: NetworkPropertiesDto = serde_json::from_value(json!({
            "network": { "epochAdjustment": "1615853185s" },
            "chain": { "currencyMosaicId": "0x091F'837E'059A'E13C" }
        }))
        .unwrap();
        let properties = NetworkProperties::try_from(dto).unwrap();
        assert_eq!(properties.epoch_adjustment, 1_615_853_185);
        assert_eq!(properties.currency_mosaic_id, Some(MosaicId(0x091F837E059AE13C)));
    }

    #[test]
    fn test_unannounced_account_has_no_public_key() {
        let address = Address::from_public_key(&KeyPair::generate().public_key(), NetworkType::Testnet);
        let dto: AccountInfoDto = serde_json::from_value(json!({
            "account": {
                "address": address.to_hex(),
                "addressHeight": "10",
                "publicKey": "0".repeat(64),
                "publicKeyHeight": "0",
                "importance": "0",
                "mosaics": []
            }
        }))
        .unwrap();
        let info = AccountInfo::try_from(dto).unwrap();
        assert_eq!(info.address, address);
        assert!(info.public_key.is_none());
    }

    fn mosaic_info_dto(divisibility: u8) -> MosaicInfoDto {
        let owner = Address::from_public_key(&KeyPair::generate().public_key(), NetworkType::Testnet);
        serde_json::from_value(json!({
            "mosaic": {
                "id": "6BED913FA20223F8",
                "supply": "1000",
                "startHeight": "1",
                "ownerAddress": owner.to_hex(),
                "revision": 1,
                "flags": 3,
                "divisibility": divisibility,
                "duration": "0"
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_mosaic_info_divisibility_bounds() {
        let info = MosaicInfo::try_from(mosaic_info_dto(6)).unwrap();
        assert_eq!(info.relative_supply().unwrap(), "0.001000");

        assert!(matches!(
            MosaicInfo::try_from(mosaic_info_dto(20)),
            Err(RepositoryError::Decode(_))
        ));
        assert!(matches!(
            MosaicInfo::try_from(mosaic_info_dto(7)),
            Err(RepositoryError::Decode(_))
        ));
    }
}
