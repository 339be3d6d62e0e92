//! Cryptographic utilities for the wallet
//!
//! This module provides:
//! - SHA3-256 / RIPEMD-160 hashing
//! - Ed25519 key management
//! - Password based encryption of stored secrets
//! - SLIP-0010 derivation for mnemonic backed accounts

pub mod encryption;
pub mod hash;
pub mod keys;
pub mod slip10;

pub use encryption::{EncryptedSecret, EncryptionError, Password, MIN_PASSWORD_LEN};
pub use hash::{is_hash_hex, ripemd160, sha3_256, sha3_256_hex, sha3_256_parts};
pub use keys::{is_key_hex, KeyError, KeyPair, PublicKey, SIGNATURE_LEN};
pub use slip10::{account_path, format_path, DerivedKey};
