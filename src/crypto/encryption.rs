//! Password based encryption of profile secrets
//!
//! A 32 byte key is derived from the password with Argon2id and a random
//! salt, then the secret is sealed with AES-256-GCM-SIV. The stored form is
//! `salt || nonce || ciphertext+tag`, hex encoded.

use aes_gcm_siv::aead::{Aead, KeyInit};
use aes_gcm_siv::{Aes256GcmSiv, Nonce};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use zeroize::{ZeroizeOnDrop, Zeroizing};

const SALT_LEN: usize = 16;
const NONCE_LEN: usize = 12;
const TAG_LEN: usize = 16;
const KEY_LEN: usize = 32;

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EncryptionError {
    #[error("Key derivation failed: {0}")]
    KeyDerivation(String),
    #[error("Encryption failed")]
    Encrypt,
    /// Raised when the tag does not authenticate, i.e. the password is wrong
    #[error("Decryption failed")]
    Decrypt,
    #[error("Malformed encrypted data")]
    Malformed,
}

/// A user supplied password, wiped from memory on drop
#[derive(Clone, ZeroizeOnDrop)]
pub struct Password {
    inner: String,
}

impl Password {
    pub fn new(inner: impl Into<String>) -> Self {
        Self {
            inner: inner.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    pub fn is_strong_enough(&self) -> bool {
        self.inner.chars().count() >= MIN_PASSWORD_LEN
    }

    /// Derive the symmetric key for a given salt
    fn encryption_key(&self, salt: &[u8]) -> Result<Zeroizing<[u8; KEY_LEN]>, EncryptionError> {
        // OWASP recommended Argon2id parameters
        let params = Params::new(19_456, 2, 1, Some(KEY_LEN))
            .map_err(|e| EncryptionError::KeyDerivation(e.to_string()))?;
        let mut key = Zeroizing::new([0u8; KEY_LEN]);
        Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
            .hash_password_into(self.inner.as_bytes(), salt, &mut key[..])
            .map_err(|e| EncryptionError::KeyDerivation(e.to_string()))?;
        Ok(key)
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}

/// An encrypted secret as stored in the profiles file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncryptedSecret(String);

impl EncryptedSecret {
    /// Encrypt `plain` under `password` with a fresh salt and nonce
    pub fn seal(plain: &[u8], password: &Password) -> Result<Self, EncryptionError> {
        let mut salt_and_nonce = [0u8; SALT_LEN + NONCE_LEN];
        OsRng.fill_bytes(&mut salt_and_nonce);
        let (salt, nonce) = salt_and_nonce.split_at(SALT_LEN);

        let key = password.encryption_key(salt)?;
        let cipher = Aes256GcmSiv::new_from_slice(&key[..])
            .map_err(|_| EncryptionError::Encrypt)?;
        let ciphertext = cipher
            .encrypt(Nonce::from_slice(nonce), plain)
            .map_err(|_| EncryptionError::Encrypt)?;

        let mut buf = Vec::with_capacity(SALT_LEN + NONCE_LEN + ciphertext.len());
        buf.extend_from_slice(&salt_and_nonce);
        buf.extend_from_slice(&ciphertext);
        Ok(Self(hex::encode(buf)))
    }

    /// Decrypt the secret. A wrong password yields [`EncryptionError::Decrypt`].
    pub fn open(&self, password: &Password) -> Result<Zeroizing<Vec<u8>>, EncryptionError> {
        let buf = hex::decode(&self.0).map_err(|_| EncryptionError::Malformed)?;
        if buf.len() < SALT_LEN + NONCE_LEN + TAG_LEN {
            return Err(EncryptionError::Malformed);
        }
        let (salt, rest) = buf.split_at(SALT_LEN);
        let (nonce, ciphertext) = rest.split_at(NONCE_LEN);

        let key = password.encryption_key(salt)?;
        let cipher = Aes256GcmSiv::new_from_slice(&key[..])
            .map_err(|_| EncryptionError::Decrypt)?;
        let plain = cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| EncryptionError::Decrypt)?;
        Ok(Zeroizing::new(plain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seal_and_open() {
        let password = Password::new("password123");
        let sealed = EncryptedSecret::seal(b"top secret", &password).unwrap();
        let opened = sealed.open(&password).unwrap();
        assert_eq!(opened.as_slice(), b"top secret");
    }

    #[test]
    fn test_wrong_password() {
        let sealed = EncryptedSecret::seal(b"top secret", &Password::new("password123")).unwrap();
        assert_eq!(
            sealed.open(&Password::new("password124")).unwrap_err(),
            EncryptionError::Decrypt
        );
    }

    #[test]
    fn test_fresh_salt_per_seal() {
        let password = Password::new("password123");
        let a = EncryptedSecret::seal(b"same", &password).unwrap();
        let b = EncryptedSecret::seal(b"same", &password).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed() {
        let sealed = EncryptedSecret("abcd".to_string());
        assert_eq!(
            sealed.open(&Password::new("password123")).unwrap_err(),
            EncryptionError::Malformed
        );
    }

    #[test]
    fn test_password_strength() {
        assert!(Password::new("12345678").is_strong_enough());
        assert!(!Password::new("1234567").is_strong_enough());
    }
}
