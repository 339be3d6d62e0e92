//! Metadata entries attached to accounts, mosaics and namespaces

use serde::{Deserialize, Serialize};
use std::fmt;

use super::address::Address;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetadataType {
    Account,
    Mosaic,
    Namespace,
}

impl MetadataType {
    pub fn id(&self) -> u8 {
        match self {
            MetadataType::Account => 0,
            MetadataType::Mosaic => 1,
            MetadataType::Namespace => 2,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(MetadataType::Account),
            1 => Some(MetadataType::Mosaic),
            2 => Some(MetadataType::Namespace),
            _ => None,
        }
    }
}

impl fmt::Display for MetadataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataType::Account => f.write_str("Account"),
            MetadataType::Mosaic => f.write_str("Mosaic"),
            MetadataType::Namespace => f.write_str("Namespace"),
        }
    }
}

/// A metadata value as stored on chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataEntry {
    pub source_address: Address,
    pub target_address: Address,
    pub scoped_metadata_key: u64,
    /// Mosaic or namespace id for non-account metadata
    pub target_id: Option<u64>,
    pub metadata_type: MetadataType,
    pub value: Vec<u8>,
}

/// Filter for metadata searches. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataSearchCriteria {
    pub source_address: Option<Address>,
    pub target_address: Option<Address>,
    pub scoped_metadata_key: Option<u64>,
    pub target_id: Option<u64>,
    pub metadata_type: Option<MetadataType>,
}
