//! Network identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ModelError;

/// The network an account or transaction belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkType {
    #[serde(rename = "MAIN_NET")]
    Mainnet,
    #[serde(rename = "TEST_NET")]
    Testnet,
    #[serde(rename = "MIJIN")]
    Mijin,
    #[serde(rename = "MIJIN_TEST")]
    MijinTest,
}

impl NetworkType {
    pub const ALL: [NetworkType; 4] = [
        NetworkType::Mainnet,
        NetworkType::Testnet,
        NetworkType::Mijin,
        NetworkType::MijinTest,
    ];

    /// Network byte, also the first byte of every address
    pub fn id(&self) -> u8 {
        match self {
            NetworkType::Mainnet => 104,
            NetworkType::Testnet => 152,
            NetworkType::Mijin => 96,
            NetworkType::MijinTest => 144,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.id() == id)
    }

    /// BIP-44 coin type used when deriving mnemonic accounts
    pub fn coin_type(&self) -> u32 {
        match self {
            NetworkType::Mainnet => 4343,
            _ => 1,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            NetworkType::Mainnet => "MAIN_NET",
            NetworkType::Testnet => "TEST_NET",
            NetworkType::Mijin => "MIJIN",
            NetworkType::MijinTest => "MIJIN_TEST",
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NetworkType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(id) = s.trim().parse::<u8>() {
            return Self::from_id(id).ok_or_else(|| ModelError::InvalidNetwork(s.to_string()));
        }
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_uppercase();
        match normalized.as_str() {
            "MAINNET" => Ok(NetworkType::Mainnet),
            "TESTNET" => Ok(NetworkType::Testnet),
            "MIJIN" => Ok(NetworkType::Mijin),
            "MIJINTEST" => Ok(NetworkType::MijinTest),
            _ => Err(ModelError::InvalidNetwork(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_ids() {
        assert_eq!("MAIN_NET".parse::<NetworkType>().unwrap(), NetworkType::Mainnet);
        assert_eq!("testnet".parse::<NetworkType>().unwrap(), NetworkType::Testnet);
        assert_eq!("mijin_test".parse::<NetworkType>().unwrap(), NetworkType::MijinTest);
        assert_eq!("96".parse::<NetworkType>().unwrap(), NetworkType::Mijin);
        assert!("PRIVATE".parse::<NetworkType>().is_err());
        assert!("1".parse::<NetworkType>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&NetworkType::Testnet).unwrap();
        assert_eq!(json, "\"TEST_NET\"");
    }
}
