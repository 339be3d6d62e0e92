//! Hashing utilities
//!
//! SHA3-256 is the network's transaction and address hash; RIPEMD-160 is
//! only used while deriving addresses from public keys.

use ripemd::Ripemd160;
use sha3::{Digest, Sha3_256};

/// Computes SHA3-256 of the input data
pub fn sha3_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha3_256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Computes SHA3-256 over several chunks without concatenating them first
pub fn sha3_256_parts(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha3_256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// Computes SHA3-256 and returns it as an uppercase hex string
pub fn sha3_256_hex(data: &[u8]) -> String {
    hex::encode_upper(sha3_256(data))
}

/// Computes RIPEMD-160 of the input data
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Checks that a string is a 64 character hex hash
pub fn is_hash_hex(value: &str) -> bool {
    value.len() == 64 && value.chars().all(|c| c.is_ascii_hexdigit())
}
