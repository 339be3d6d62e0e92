//! Account addresses
//!
//! An address is 24 bytes: the network byte, RIPEMD-160(SHA3-256(public
//! key)) and a 3 byte checksum. It is shown as 39 base32 characters,
//! optionally grouped by six with dashes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::network::NetworkType;
use super::ModelError;
use crate::crypto::{ripemd160, sha3_256, PublicKey};

/// Raw address length in bytes
pub const ADDRESS_LEN: usize = 24;

/// Length of the plain base32 representation
pub const PLAIN_ADDRESS_LEN: usize = 39;

const CHECKSUM_LEN: usize = 3;
const BASE32_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// A network account address
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// Derive the address owned by a public key on a network
    pub fn from_public_key(public_key: &PublicKey, network_type: NetworkType) -> Self {
        let mut bytes = [0u8; ADDRESS_LEN];
        bytes[0] = network_type.id();
        bytes[1..21].copy_from_slice(&ripemd160(&sha3_256(public_key.as_bytes())));
        let checksum = sha3_256(&bytes[..21]);
        bytes[21..].copy_from_slice(&checksum[..CHECKSUM_LEN]);
        Self(bytes)
    }

    /// Parse the plain or pretty (dashed) base32 form
    pub fn from_raw(raw: &str) -> Result<Self, ModelError> {
        let plain: String = raw.trim().chars().filter(|c| *c != '-').collect();
        if plain.len() != PLAIN_ADDRESS_LEN {
            return Err(ModelError::InvalidAddress(raw.to_string()));
        }
        let decoded = base32_decode(&plain.to_ascii_uppercase())
            .ok_or_else(|| ModelError::InvalidAddress(raw.to_string()))?;
        Self::from_bytes(&decoded[..ADDRESS_LEN])
            .map_err(|_| ModelError::InvalidAddress(raw.to_string()))
    }

    /// Parse the 48 character hex form returned by the REST gateway
    pub fn from_hex(hex_address: &str) -> Result<Self, ModelError> {
        let bytes = hex::decode(hex_address)
            .map_err(|_| ModelError::InvalidAddress(hex_address.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Build from raw bytes, checking network byte and checksum
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ModelError> {
        let invalid = || ModelError::InvalidAddress(hex::encode_upper(bytes));
        let bytes: [u8; ADDRESS_LEN] = bytes.try_into().map_err(|_| invalid())?;
        NetworkType::from_id(bytes[0]).ok_or_else(invalid)?;
        let checksum = sha3_256(&bytes[..21]);
        if checksum[..CHECKSUM_LEN] != bytes[21..] {
            return Err(invalid());
        }
        Ok(Self(bytes))
    }

    /// Accepts base32 (plain or pretty) or hex
    pub fn parse(value: &str) -> Result<Self, ModelError> {
        if value.len() == ADDRESS_LEN * 2 && value.chars().all(|c| c.is_ascii_hexdigit()) {
            Self::from_hex(value)
        } else {
            Self::from_raw(value)
        }
    }

    pub fn network_type(&self) -> NetworkType {
        // checked on construction
        NetworkType::from_id(self.0[0]).unwrap_or(NetworkType::Mainnet)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// 39 character base32 form
    pub fn plain(&self) -> String {
        let mut encoded = base32_encode(&self.0);
        encoded.truncate(PLAIN_ADDRESS_LEN);
        encoded
    }

    /// Base32 form grouped by six characters
    pub fn pretty(&self) -> String {
        let plain = self.plain();
        plain
            .as_bytes()
            .chunks(6)
            .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
            .collect::<Vec<_>>()
            .join("-")
    }

    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.plain())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.plain())
    }
}

impl FromStr for Address {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Address {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.plain()
    }
}

/// RFC 4648 base32 without padding
fn base32_encode(data: &[u8]) -> String {
    let mut out = String::with_capacity((data.len() * 8 + 4) / 5);
    let mut buffer: u32 = 0;
    let mut bits = 0u32;
    for &byte in data {
        buffer = (buffer << 8) | u32::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(BASE32_ALPHABET[((buffer >> bits) & 0x1F) as usize] as char);
        }
        buffer &= (1 << bits) - 1;
    }
    if bits > 0 {
        out.push(BASE32_ALPHABET[((buffer << (5 - bits)) & 0x1F) as usize] as char);
    }
    out
}

fn base32_decode(text: &str) -> Option<Vec<u8>> {
    let mut out = Vec::with_capacity(text.len() * 5 / 8);
    let mut buffer: u32 = 0;
    let mut bits = 0u32;
    for c in text.bytes() {
        let value = BASE32_ALPHABET.iter().position(|&a| a == c)? as u32;
        buffer = (buffer << 5) | value;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
            buffer &= (1 << bits) - 1;
        }
    }
    Some(out)
}
