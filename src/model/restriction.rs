//! Account restriction flags and modification actions

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ModelError;

bitflags! {
    /// What an account restriction filters and in which direction
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct AccountRestrictionFlags: u16 {
        const ADDRESS = 0x0001;
        const MOSAIC_ID = 0x0002;
        const TRANSACTION_TYPE = 0x0004;
        const OUTGOING = 0x4000;
        const BLOCK = 0x8000;
    }
}

impl AccountRestrictionFlags {
    pub const ALLOW_INCOMING_ADDRESS: Self = Self::ADDRESS;
    pub const ALLOW_MOSAIC: Self = Self::MOSAIC_ID;
    pub const BLOCK_MOSAIC: Self = Self::MOSAIC_ID.union(Self::BLOCK);

    /// Parse the flag names accepted for mosaic restrictions
    pub fn parse_mosaic(value: &str) -> Result<Self, ModelError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "allowmosaic" => Ok(Self::ALLOW_MOSAIC),
            "blockmosaic" => Ok(Self::BLOCK_MOSAIC),
            _ => Err(ModelError::InvalidRestrictionFlags(value.to_string())),
        }
    }

    /// Human readable name, e.g. `BlockMosaic` or `AllowOutgoingAddress`
    pub fn describe(&self) -> String {
        let verb = if self.contains(Self::BLOCK) { "Block" } else { "Allow" };
        let direction = if self.contains(Self::OUTGOING) { "Outgoing" } else { "" };
        let target = if self.contains(Self::MOSAIC_ID) {
            "Mosaic"
        } else if self.contains(Self::TRANSACTION_TYPE) {
            "TransactionType"
        } else if self.contains(Self::ADDRESS) {
            if direction.is_empty() {
                "IncomingAddress"
            } else {
                "Address"
            }
        } else {
            "Unknown"
        };
        format!("{}{}{}", verb, direction, target)
    }
}

/// Add or remove an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionType {
    Add,
    Remove,
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionType::Add => f.write_str("Add"),
            ActionType::Remove => f.write_str("Remove"),
        }
    }
}

impl FromStr for ActionType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "1" => Ok(ActionType::Add),
            "remove" | "0" => Ok(ActionType::Remove),
            _ => Err(ModelError::InvalidAction(s.to_string())),
        }
    }
}

/// Link or unlink a key or alias
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkAction {
    Unlink,
    Link,
}

impl fmt::Display for LinkAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkAction::Link => f.write_str("Link"),
            LinkAction::Unlink => f.write_str("Unlink"),
        }
    }
}

impl FromStr for LinkAction {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "link" | "1" => Ok(LinkAction::Link),
            "unlink" | "0" => Ok(LinkAction::Unlink),
            _ => Err(ModelError::InvalidAction(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mosaic_flags() {
        assert_eq!(
            AccountRestrictionFlags::parse_mosaic("AllowMosaic").unwrap().bits(),
            0x0002
        );
        assert_eq!(
            AccountRestrictionFlags::parse_mosaic("BlockMosaic").unwrap().bits(),
            0x8002
        );
        assert!(AccountRestrictionFlags::parse_mosaic("AllowAddress").is_err());
    }

    #[test]
    fn test_describe() {
        assert_eq!(AccountRestrictionFlags::BLOCK_MOSAIC.describe(), "BlockMosaic");
        assert_eq!(
            (AccountRestrictionFlags::ADDRESS | AccountRestrictionFlags::OUTGOING).describe(),
            "AllowOutgoingAddress"
        );
        assert_eq!(AccountRestrictionFlags::ADDRESS.describe(), "AllowIncomingAddress");
    }

    #[test]
    fn test_parse_action() {
        assert_eq!("Add".parse::<ActionType>().unwrap(), ActionType::Add);
        assert_eq!("remove".parse::<ActionType>().unwrap(), ActionType::Remove);
        assert!("delete".parse::<ActionType>().is_err());
        assert_eq!("Unlink".parse::<LinkAction>().unwrap(), LinkAction::Unlink);
    }
}
