//! Ed25519 key management
//!
//! Provides key pair generation, signing, and verification for network
//! accounts. Keys travel as 64 character uppercase hex strings.

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use zeroize::Zeroizing;

/// Length of a raw Ed25519 signature
pub const SIGNATURE_LEN: usize = 64;

/// Errors that can occur during key operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum KeyError {
    #[error("Invalid private key")]
    InvalidPrivateKey,
    #[error("Invalid public key")]
    InvalidPublicKey,
    #[error("Invalid signature")]
    InvalidSignature,
}

/// An Ed25519 public key
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PublicKey([u8; 32]);

impl PublicKey {
    /// Wrap raw public key bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse a public key from a hex string
    pub fn from_hex(hex_key: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(hex_key).map_err(|_| KeyError::InvalidPublicKey)?;
        let bytes: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| KeyError::InvalidPublicKey)?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Uppercase hex rendering
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }

    /// Verify a signature made over `data` by the owner of this key
    pub fn verify(&self, data: &[u8], signature: &[u8]) -> Result<bool, KeyError> {
        let verifying_key =
            VerifyingKey::from_bytes(&self.0).map_err(|_| KeyError::InvalidPublicKey)?;
        let signature: [u8; SIGNATURE_LEN] = signature
            .try_into()
            .map_err(|_| KeyError::InvalidSignature)?;
        let signature = Signature::from_bytes(&signature);
        Ok(verifying_key.verify(data, &signature).is_ok())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

impl FromStr for PublicKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for PublicKey {
    type Error = KeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<PublicKey> for String {
    fn from(key: PublicKey) -> Self {
        key.to_hex()
    }
}

/// A key pair consisting of a private key and its corresponding public key
#[derive(Clone)]
pub struct KeyPair {
    signing_key: SigningKey,
}

impl KeyPair {
    /// Generate a new random key pair
    pub fn generate() -> Self {
        let mut secret = Zeroizing::new([0u8; 32]);
        OsRng.fill_bytes(&mut secret[..]);
        Self::from_secret_bytes(&secret)
    }

    /// Create a key pair from raw private key bytes
    pub fn from_secret_bytes(secret: &[u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(secret),
        }
    }

    /// Create a key pair from a hex-encoded private key
    pub fn from_private_key_hex(hex_key: &str) -> Result<Self, KeyError> {
        let bytes =
            Zeroizing::new(hex::decode(hex_key).map_err(|_| KeyError::InvalidPrivateKey)?);
        let secret: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| KeyError::InvalidPrivateKey)?;
        Ok(Self::from_secret_bytes(&secret))
    }

    /// Get the private key as an uppercase hex string
    /// WARNING: Keep this secret!
    pub fn private_key_hex(&self) -> String {
        hex::encode_upper(self.signing_key.to_bytes())
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.signing_key.verifying_key().to_bytes())
    }

    /// Get the public key as an uppercase hex string
    pub fn public_key_hex(&self) -> String {
        self.public_key().to_hex()
    }

    /// Sign arbitrary data with the private key
    pub fn sign(&self, data: &[u8]) -> [u8; SIGNATURE_LEN] {
        self.signing_key.sign(data).to_bytes()
    }

    /// Verify a signature against this key pair's public key
    pub fn verify(&self, data: &[u8], signature: &[u8]) -> Result<bool, KeyError> {
        self.public_key().verify(data, signature)
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key())
            .finish_non_exhaustive()
    }
}

/// Checks that a string is a 64 character hex key
pub fn is_key_hex(value: &str) -> bool {
    value.len() == 64 && value.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_pair_generation() {
        let kp = KeyPair::generate();
        assert_eq!(kp.private_key_hex().len(), 64);
        assert_eq!(kp.public_key_hex().len(), 64);
    }

    #[test]
    fn test_rfc8032_public_key() {
        // RFC 8032 test vector 1
        let kp = KeyPair::from_private_key_hex(
            "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60",
        )
        .unwrap();
        assert_eq!(
            kp.public_key_hex(),
            "D75A980182B10AB7D54BFED3C964073A0EE172F3DAA62325AF021A68F707511A"
        );
    }

    #[test]
    fn test_sign_and_verify() {
        let kp = KeyPair::generate();
        let message = b"Hello, blockchain!";

        let signature = kp.sign(message);
        assert!(kp.verify(message, &signature).unwrap());
        assert!(!kp.verify(b"tampered", &signature).unwrap());
    }

    #[test]
    fn test_key_pair_from_hex() {
        let kp1 = KeyPair::generate();
        let kp2 = KeyPair::from_private_key_hex(&kp1.private_key_hex()).unwrap();
        assert_eq!(kp1.public_key(), kp2.public_key());
    }

    #[test]
    fn test_invalid_keys_rejected() {
        assert_eq!(
            KeyPair::from_private_key_hex("abcd").unwrap_err(),
            KeyError::InvalidPrivateKey
        );
        assert_eq!(
            PublicKey::from_hex("not hex").unwrap_err(),
            KeyError::InvalidPublicKey
        );
    }

    #[test]
    fn test_public_key_serde_as_hex() {
        let key = KeyPair::generate().public_key();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, format!("\"{}\"", key.to_hex()));
        let back: PublicKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
