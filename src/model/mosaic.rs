//! Mosaics, namespaces and amounts

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::address::Address;
use super::ModelError;
use crate::crypto::sha3_256_parts;

/// Maximum mosaic divisibility accepted by the network
pub const MAX_DIVISIBILITY: u8 = 6;

/// Parse a 64-bit id written as hex. Accepts `0x` prefixes and the `'`
/// digit separators used by the network properties endpoint.
pub fn parse_u64_hex(value: &str) -> Result<u64, ModelError> {
    let cleaned: String = value
        .trim()
        .trim_start_matches("0x")
        .trim_start_matches("0X")
        .chars()
        .filter(|c| *c != '\'')
        .collect();
    if cleaned.is_empty() || cleaned.len() > 16 {
        return Err(ModelError::InvalidId(value.to_string()));
    }
    u64::from_str_radix(&cleaned, 16).map_err(|_| ModelError::InvalidId(value.to_string()))
}

/// Mosaic identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MosaicId(pub u64);

impl MosaicId {
    pub fn from_hex(value: &str) -> Result<Self, ModelError> {
        parse_u64_hex(value).map(Self)
    }

    pub fn to_hex(&self) -> String {
        format!("{:016X}", self.0)
    }
}

impl fmt::Display for MosaicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for MosaicId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<MosaicId> for String {
    fn from(id: MosaicId) -> Self {
        id.to_hex()
    }
}

/// Namespace identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NamespaceId(pub u64);

impl NamespaceId {
    /// Derive the id of a full namespace name such as `symbol.xym`.
    ///
    /// Each level hashes the parent id (two little endian u32 halves) and
    /// the part name; the id is the first 8 bytes with the high bit set.
    pub fn from_name(full_name: &str) -> Result<Self, ModelError> {
        let mut parent: u64 = 0;
        for part in full_name.split('.') {
            if !is_valid_namespace_part(part) {
                return Err(ModelError::InvalidNamespace(full_name.to_string()));
            }
            let low = (parent as u32).to_le_bytes();
            let high = ((parent >> 32) as u32).to_le_bytes();
            let hash = sha3_256_parts(&[&low, &high, part.as_bytes()]);
            let mut id_bytes = [0u8; 8];
            id_bytes.copy_from_slice(&hash[..8]);
            parent = u64::from_le_bytes(id_bytes) | (1 << 63);
        }
        Ok(Self(parent))
    }

    pub fn from_hex(value: &str) -> Result<Self, ModelError> {
        parse_u64_hex(value).map(Self)
    }

    pub fn to_hex(&self) -> String {
        format!("{:016X}", self.0)
    }
}

fn is_valid_namespace_part(part: &str) -> bool {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() || first.is_ascii_digit() => {}
        _ => return false,
    }
    part.len() <= 64
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

impl fmt::Display for NamespaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for NamespaceId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<NamespaceId> for String {
    fn from(id: NamespaceId) -> Self {
        id.to_hex()
    }
}

/// A mosaic reference as it appears in transactions: either a mosaic id or
/// a namespace alias still to be resolved by the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum UnresolvedMosaicId {
    Mosaic(MosaicId),
    Alias(NamespaceId),
}

impl UnresolvedMosaicId {
    pub fn to_hex(&self) -> String {
        match self {
            UnresolvedMosaicId::Mosaic(id) => id.to_hex(),
            UnresolvedMosaicId::Alias(id) => id.to_hex(),
        }
    }

    /// Ids with the high bit set are namespace ids
    pub fn from_u64(value: u64) -> Self {
        if value & (1 << 63) != 0 {
            UnresolvedMosaicId::Alias(NamespaceId(value))
        } else {
            UnresolvedMosaicId::Mosaic(MosaicId(value))
        }
    }

    pub fn as_u64(&self) -> u64 {
        match self {
            UnresolvedMosaicId::Mosaic(id) => id.0,
            UnresolvedMosaicId::Alias(id) => id.0,
        }
    }
}

impl fmt::Display for UnresolvedMosaicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for UnresolvedMosaicId {
    type Err = ModelError;

    /// `@name.sub` parses as an alias, anything else as a hex mosaic id
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().strip_prefix('@') {
            Some(name) => NamespaceId::from_name(name).map(UnresolvedMosaicId::Alias),
            None => MosaicId::from_hex(s).map(UnresolvedMosaicId::Mosaic),
        }
    }
}

impl From<MosaicId> for UnresolvedMosaicId {
    fn from(id: MosaicId) -> Self {
        UnresolvedMosaicId::Mosaic(id)
    }
}

/// An amount of a given mosaic, in absolute units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mosaic {
    pub id: UnresolvedMosaicId,
    pub amount: u64,
}

impl Mosaic {
    pub fn new(id: impl Into<UnresolvedMosaicId>, amount: u64) -> Self {
        Self {
            id: id.into(),
            amount,
        }
    }
}

impl FromStr for Mosaic {
    type Err = ModelError;

    /// `<mosaic id or @alias>::<absolute amount>`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, amount) = s
            .split_once("::")
            .ok_or_else(|| ModelError::InvalidMosaic(s.to_string()))?;
        let amount = amount
            .trim()
            .parse::<u64>()
            .map_err(|_| ModelError::InvalidMosaic(s.to_string()))?;
        Ok(Self {
            id: id.parse()?,
            amount,
        })
    }
}

/// Parse a comma separated list of mosaics
pub fn parse_mosaics(value: &str) -> Result<Vec<Mosaic>, ModelError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Mosaic::from_str)
        .collect()
}

/// Convert a decimal amount such as `12.5` into absolute units
pub fn relative_to_absolute(relative: &str, divisibility: u8) -> Result<u64, ModelError> {
    let invalid = || ModelError::InvalidAmount(relative.to_string());
    let relative = relative.trim();
    let (whole, fraction) = relative.split_once('.').unwrap_or((relative, ""));
    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if fraction.len() > divisibility as usize
        || !whole.chars().all(|c| c.is_ascii_digit())
        || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return Err(invalid());
    }
    let scale = scale(divisibility)?;
    let whole: u64 = if whole.is_empty() { 0 } else { whole.parse().map_err(|_| invalid())? };
    let padded = format!("{:0<width$}", fraction, width = divisibility as usize);
    let fraction: u64 = if padded.is_empty() { 0 } else { padded.parse().map_err(|_| invalid())? };
    whole
        .checked_mul(scale)
        .and_then(|w| w.checked_add(fraction))
        .ok_or_else(invalid)
}

/// Render absolute units as a decimal string
pub fn absolute_to_relative(absolute: u64, divisibility: u8) -> Result<String, ModelError> {
    let scale = scale(divisibility)?;
    if divisibility == 0 {
        return Ok(absolute.to_string());
    }
    Ok(format!(
        "{}.{:0width$}",
        absolute / scale,
        absolute % scale,
        width = divisibility as usize
    ))
}

fn scale(divisibility: u8) -> Result<u64, ModelError> {
    10u64
        .checked_pow(u32::from(divisibility))
        .ok_or(ModelError::InvalidDivisibility(divisibility))
}

/// The mosaic used to pay fees on a network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkCurrency {
    pub mosaic_id: Option<MosaicId>,
    pub namespace: Option<String>,
    pub divisibility: u8,
}

impl NetworkCurrency {
    /// The id used when building transactions: the mosaic id if known,
    /// otherwise the namespace alias.
    pub fn unresolved_id(&self) -> Result<UnresolvedMosaicId, ModelError> {
        if let Some(id) = self.mosaic_id {
            return Ok(UnresolvedMosaicId::Mosaic(id));
        }
        match &self.namespace {
            Some(name) => Ok(UnresolvedMosaicId::Alias(NamespaceId::from_name(name)?)),
            None => Err(ModelError::InvalidMosaic("network currency".to_string())),
        }
    }

    pub fn create_relative(&self, relative: &str) -> Result<Mosaic, ModelError> {
        Ok(Mosaic {
            id: self.unresolved_id()?,
            amount: relative_to_absolute(relative, self.divisibility)?,
        })
    }

    pub fn create_absolute(&self, amount: u64) -> Result<Mosaic, ModelError> {
        Ok(Mosaic {
            id: self.unresolved_id()?,
            amount,
        })
    }
}

bitflags! {
    /// Mosaic properties fixed at definition time
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct MosaicFlags: u8 {
        const SUPPLY_MUTABLE = 0x01;
        const TRANSFERABLE = 0x02;
        const RESTRICTABLE = 0x04;
        const REVOKABLE = 0x08;
    }
}

/// Mosaic definition and supply as reported by the network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MosaicInfo {
    pub id: MosaicId,
    pub supply: u64,
    pub start_height: u64,
    pub owner_address: Address,
    pub revision: u32,
    pub flags: MosaicFlags,
    pub divisibility: u8,
    pub duration: u64,
}

impl MosaicInfo {
    pub fn is_supply_mutable(&self) -> bool {
        self.flags.contains(MosaicFlags::SUPPLY_MUTABLE)
    }

    pub fn is_transferable(&self) -> bool {
        self.flags.contains(MosaicFlags::TRANSFERABLE)
    }

    pub fn is_restrictable(&self) -> bool {
        self.flags.contains(MosaicFlags::RESTRICTABLE)
    }

    /// Height after which the mosaic expires; `None` for eternal mosaics
    pub fn expiration_height(&self) -> Option<u64> {
        if self.duration == 0 {
            None
        } else {
            Some(self.start_height.saturating_add(self.duration))
        }
    }

    pub fn relative_supply(&self) -> Result<String, ModelError> {
        absolute_to_relative(self.supply, self.divisibility)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_u64_hex() {
        assert_eq!(parse_u64_hex("0x6BED'913F'A202'23F8").unwrap(), 0x6BED913FA20223F8);
        assert_eq!(parse_u64_hex("3e8").unwrap(), 1000);
        assert!(parse_u64_hex("").is_err());
        assert!(parse_u64_hex("11112222333344445").is_err());
        assert!(parse_u64_hex("XYZ").is_err());
    }

    #[test]
    fn test_mosaic_id_hex_is_padded_uppercase() {
        assert_eq!(MosaicId(0x3e8).to_hex(), "00000000000003E8");
    }

    #[test]
    fn test_namespace_id_from_name() {
        let id = NamespaceId::from_name("symbol.xym").unwrap();
        assert_eq!(id.to_hex(), "E74B99BA41F4AFEE");
        assert!(NamespaceId::from_name("Symbol").is_err());
        assert!(NamespaceId::from_name("a..b").is_err());
    }

    #[test]
    fn test_unresolved_mosaic_id() {
        let alias: UnresolvedMosaicId = "@symbol.xym".parse().unwrap();
        assert!(matches!(alias, UnresolvedMosaicId::Alias(_)));
        assert_eq!(UnresolvedMosaicId::from_u64(alias.as_u64()), alias);

        let mosaic: UnresolvedMosaicId = "6BED913FA20223F8".parse().unwrap();
        assert_eq!(mosaic, UnresolvedMosaicId::Mosaic(MosaicId(0x6BED913FA20223F8)));
    }

    #[test]
    fn test_parse_mosaics() {
        let mosaics = parse_mosaics("@symbol.xym::1000000, 6BED913FA20223F8::1").unwrap();
        assert_eq!(mosaics.len(), 2);
        assert_eq!(mosaics[0].amount, 1_000_000);
        assert!(parse_mosaics("6BED913FA20223F8").is_err());
    }

    #[test]
    fn test_relative_amounts() {
        assert_eq!(relative_to_absolute("12.5", 6).unwrap(), 12_500_000);
        assert_eq!(relative_to_absolute("10", 6).unwrap(), 10_000_000);
        assert_eq!(relative_to_absolute(".000001", 6).unwrap(), 1);
        assert_eq!(relative_to_absolute("7", 0).unwrap(), 7);
        assert!(relative_to_absolute("1.0000001", 6).is_err());
        assert!(relative_to_absolute("-1", 6).is_err());
        assert!(relative_to_absolute(".", 6).is_err());

        assert_eq!(absolute_to_relative(12_500_000, 6).unwrap(), "12.500000");
        assert_eq!(absolute_to_relative(42, 0).unwrap(), "42");
    }

    #[test]
    fn test_divisibility_overflow_is_an_error() {
        assert_eq!(
            absolute_to_relative(1, 20),
            Err(ModelError::InvalidDivisibility(20))
        );
        assert!(absolute_to_relative(1, 19).is_ok());
        assert_eq!(
            relative_to_absolute("1", 20),
            Err(ModelError::InvalidDivisibility(20))
        );
    }

    #[test]
    fn test_expiration() {
        let owner = Address::from_public_key(
            &crate::crypto::KeyPair::generate().public_key(),
            crate::model::NetworkType::Testnet,
        );
        let mut info = MosaicInfo {
            id: MosaicId(1),
            supply: 100,
            start_height: 10,
            owner_address: owner,
            revision: 1,
            flags: MosaicFlags::TRANSFERABLE,
            divisibility: 0,
            duration: 0,
        };
        assert_eq!(info.expiration_height(), None);
        info.duration = 5;
        assert_eq!(info.expiration_height(), Some(15));
        assert!(info.is_transferable());
        assert!(!info.is_supply_mutable());
    }
}
