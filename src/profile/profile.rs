//! Profile model
//!
//! A profile binds an account to the node it talks to. The private key and
//! the optional mnemonic are stored encrypted with the profile password.

use bip39::Mnemonic;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use zeroize::Zeroizing;

use super::ProfileError;
use crate::crypto::{account_path, format_path, DerivedKey, EncryptedSecret, KeyPair, Password, PublicKey};
use crate::model::{Account, Address, NetworkCurrency, NetworkType};

/// How the account of a new profile is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImportType {
    PrivateKey,
    Mnemonic,
}

impl ImportType {
    pub const ALL: [ImportType; 2] = [ImportType::PrivateKey, ImportType::Mnemonic];
}

impl fmt::Display for ImportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportType::PrivateKey => f.write_str("PrivateKey"),
            ImportType::Mnemonic => f.write_str("Mnemonic"),
        }
    }
}

impl FromStr for ImportType {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['_', '-', ' '], "").as_str() {
            "privatekey" | "0" => Ok(ImportType::PrivateKey),
            "mnemonic" | "1" => Ok(ImportType::Mnemonic),
            _ => Err(ProfileError::InvalidImportType(s.to_string())),
        }
    }
}

/// Node and network properties shared by every profile on a network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSettings {
    pub network_type: NetworkType,
    pub url: String,
    pub generation_hash: String,
    /// Seconds between the unix epoch and the network epoch
    pub epoch_adjustment: u64,
    pub network_currency: NetworkCurrency,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct EncryptedMnemonic {
    phrase: EncryptedSecret,
    path_number: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(flatten)]
    pub network: NetworkSettings,
    pub address: Address,
    pub public_key: PublicKey,
    encrypted_private_key: EncryptedSecret,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mnemonic: Option<EncryptedMnemonic>,
    #[serde(default)]
    pub is_default: bool,
}

impl Profile {
    /// Create a profile for an existing private key
    pub fn from_private_key(
        name: &str,
        network: NetworkSettings,
        private_key: &str,
        password: &Password,
        is_default: bool,
    ) -> Result<Self, ProfileError> {
        let key_pair = KeyPair::from_private_key_hex(private_key)?;
        Self::build(name, network, &key_pair, None, password, is_default)
    }

    /// Create a profile for the account at `path_number` of a mnemonic
    pub fn from_mnemonic(
        name: &str,
        network: NetworkSettings,
        mnemonic: &Mnemonic,
        path_number: u32,
        password: &Password,
        is_default: bool,
    ) -> Result<Self, ProfileError> {
        let key_pair = derive_key_pair(mnemonic, network.network_type, path_number)?;
        let phrase = Zeroizing::new(mnemonic.to_string());
        let encrypted = EncryptedMnemonic {
            phrase: EncryptedSecret::seal(phrase.as_bytes(), password)?,
            path_number,
        };
        Self::build(name, network, &key_pair, Some(encrypted), password, is_default)
    }

    fn build(
        name: &str,
        network: NetworkSettings,
        key_pair: &KeyPair,
        mnemonic: Option<EncryptedMnemonic>,
        password: &Password,
        is_default: bool,
    ) -> Result<Self, ProfileError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProfileError::InvalidName);
        }
        if !password.is_strong_enough() {
            return Err(ProfileError::WeakPassword);
        }
        let public_key = key_pair.public_key();
        let private_key = Zeroizing::new(key_pair.private_key_hex());
        Ok(Self {
            name: name.to_string(),
            address: Address::from_public_key(&public_key, network.network_type),
            network,
            public_key,
            encrypted_private_key: EncryptedSecret::seal(private_key.as_bytes(), password)?,
            mnemonic,
            is_default,
        })
    }

    pub fn network_type(&self) -> NetworkType {
        self.network.network_type
    }

    pub fn url(&self) -> &str {
        &self.network.url
    }

    pub fn generation_hash(&self) -> &str {
        &self.network.generation_hash
    }

    pub fn epoch_adjustment(&self) -> u64 {
        self.network.epoch_adjustment
    }

    pub fn network_currency(&self) -> &NetworkCurrency {
        &self.network.network_currency
    }

    pub fn import_type(&self) -> ImportType {
        if self.mnemonic.is_some() {
            ImportType::Mnemonic
        } else {
            ImportType::PrivateKey
        }
    }

    /// Derivation path of mnemonic profiles, e.g. `m/44'/4343'/0'/0'/0'`
    pub fn derivation_path(&self) -> Option<String> {
        self.mnemonic.as_ref().map(|m| {
            format_path(&account_path(self.network_type().coin_type(), m.path_number))
        })
    }

    /// Decrypt the signing account
    pub fn decrypt(&self, password: &Password) -> Result<Account, ProfileError> {
        let plain = self
            .encrypted_private_key
            .open(password)
            .map_err(|_| ProfileError::WrongPassword)?;
        let hex_key = std::str::from_utf8(&plain).map_err(|_| ProfileError::CorruptSecret)?;
        let account = Account::from_private_key(hex_key, self.network_type())
            .map_err(|_| ProfileError::CorruptSecret)?;
        if account.public_key() != self.public_key {
            return Err(ProfileError::CorruptSecret);
        }
        log::debug!("Decrypted account of profile {}", self.name);
        Ok(account)
    }

    /// Decrypt the mnemonic, if the profile has one
    pub fn decrypt_mnemonic(
        &self,
        password: &Password,
    ) -> Result<Option<Zeroizing<String>>, ProfileError> {
        let Some(mnemonic) = &self.mnemonic else {
            return Ok(None);
        };
        let plain = mnemonic
            .phrase
            .open(password)
            .map_err(|_| ProfileError::WrongPassword)?;
        let phrase = String::from_utf8(plain.to_vec()).map_err(|_| ProfileError::CorruptSecret)?;
        Ok(Some(Zeroizing::new(phrase)))
    }

    /// Re-encrypt the stored secrets under a new password
    pub fn change_password(
        &mut self,
        old_password: &Password,
        new_password: &Password,
    ) -> Result<(), ProfileError> {
        if !new_password.is_strong_enough() {
            return Err(ProfileError::WeakPassword);
        }
        let account = self.decrypt(old_password)?;
        let private_key = Zeroizing::new(account.private_key_hex());
        let encrypted_private_key = EncryptedSecret::seal(private_key.as_bytes(), new_password)?;

        let mnemonic = match (&self.mnemonic, self.decrypt_mnemonic(old_password)?) {
            (Some(old), Some(phrase)) => Some(EncryptedMnemonic {
                phrase: EncryptedSecret::seal(phrase.as_bytes(), new_password)?,
                path_number: old.path_number,
            }),
            _ => None,
        };

        self.encrypted_private_key = encrypted_private_key;
        self.mnemonic = mnemonic;
        Ok(())
    }
}

/// Generate a random 24 word mnemonic
pub fn generate_mnemonic() -> Result<Mnemonic, ProfileError> {
    let mut entropy = Zeroizing::new([0u8; 32]);
    OsRng.fill_bytes(&mut entropy[..]);
    Mnemonic::from_entropy(&entropy[..]).map_err(|e| ProfileError::InvalidMnemonic(e.to_string()))
}

/// Parse a mnemonic phrase, tolerating extra whitespace and case
pub fn parse_mnemonic(phrase: &str) -> Result<Mnemonic, ProfileError> {
    let normalized = phrase
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    Mnemonic::parse_normalized(&normalized).map_err(|e| ProfileError::InvalidMnemonic(e.to_string()))
}

/// Derive the key pair of account `path_number` along the network's
/// BIP-44 path
pub fn derive_key_pair(
    mnemonic: &Mnemonic,
    network_type: NetworkType,
    path_number: u32,
) -> Result<KeyPair, ProfileError> {
    let seed = Zeroizing::new(mnemonic.to_seed_normalized(""));
    let path = account_path(network_type.coin_type(), path_number);
    Ok(DerivedKey::derive_path(&seed[..], &path)?.to_key_pair())
}
