//! Profiles: locally stored accounts bound to a node

pub mod profile;
pub mod store;

use thiserror::Error;

pub use profile::{
    derive_key_pair, generate_mnemonic, parse_mnemonic, ImportType, NetworkSettings, Profile,
};
pub use store::ProfileStore;

/// Profile-related errors
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Profile {0} not found")]
    NotFound(String),
    #[error("Profile {0} already exists")]
    AlreadyExists(String),
    #[error("No default profile found")]
    NoDefault,
    #[error("Profile name cannot be empty")]
    InvalidName,
    #[error("Password must have at least {} characters", crate::crypto::MIN_PASSWORD_LEN)]
    WeakPassword,
    #[error("Wrong password")]
    WrongPassword,
    #[error("Stored secret is corrupt")]
    CorruptSecret,
    #[error("Invalid import type: {0}")]
    InvalidImportType(String),
    #[error("Invalid mnemonic: {0}")]
    InvalidMnemonic(String),
    #[error("Encryption error: {0}")]
    Encryption(#[from] crate::crypto::EncryptionError),
    #[error("Crypto error: {0}")]
    Crypto(#[from] crate::crypto::KeyError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
