//! SLIP-0010 Ed25519 key derivation for mnemonic profiles.
//!
//! Reference: https://github.com/satoshilabs/slips/blob/master/slip-0010.md

use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::Zeroizing;

use super::keys::{KeyError, KeyPair};

type HmacSha512 = Hmac<Sha512>;

const ED25519_CURVE: &[u8] = b"ed25519 seed";

/// BIP-44 purpose field
pub const PURPOSE: u32 = 44;

/// SLIP-0010 derived key
pub struct DerivedKey {
    private_key: Zeroizing<[u8; 32]>,
    chain_code: Zeroizing<[u8; 32]>,
}

impl DerivedKey {
    fn from_hmac(result: &[u8]) -> Self {
        let mut private_key = Zeroizing::new([0u8; 32]);
        let mut chain_code = Zeroizing::new([0u8; 32]);
        private_key.copy_from_slice(&result[..32]);
        chain_code.copy_from_slice(&result[32..64]);
        Self {
            private_key,
            chain_code,
        }
    }

    /// Derive master key from seed
    pub fn from_seed(seed: &[u8]) -> Result<Self, KeyError> {
        let mut mac =
            HmacSha512::new_from_slice(ED25519_CURVE).map_err(|_| KeyError::InvalidPrivateKey)?;
        mac.update(seed);
        Ok(Self::from_hmac(&mac.finalize().into_bytes()))
    }

    /// Derive child key at hardened index. Ed25519 has no normal derivation.
    pub fn derive_hardened(&self, index: u32) -> Result<Self, KeyError> {
        let hardened_index = index | 0x8000_0000;

        let mut mac = HmacSha512::new_from_slice(&self.chain_code[..])
            .map_err(|_| KeyError::InvalidPrivateKey)?;
        mac.update(&[0x00]);
        mac.update(&self.private_key[..]);
        mac.update(&hardened_index.to_be_bytes());

        Ok(Self::from_hmac(&mac.finalize().into_bytes()))
    }

    /// Walk a fully hardened path from the seed
    pub fn derive_path(seed: &[u8], path: &[u32]) -> Result<Self, KeyError> {
        path.iter()
            .try_fold(Self::from_seed(seed)?, |key, index| key.derive_hardened(*index))
    }

    pub fn private_key(&self) -> &[u8; 32] {
        &self.private_key
    }

    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    pub fn to_key_pair(&self) -> KeyPair {
        KeyPair::from_secret_bytes(&self.private_key)
    }
}

/// The account path `m/44'/coin'/account'/0'/0'`
pub fn account_path(coin_type: u32, account: u32) -> [u32; 5] {
    [PURPOSE, coin_type, account, 0, 0]
}

/// Format a path the way wallets display it
pub fn format_path(path: &[u32]) -> String {
    let mut out = String::from("m");
    for index in path {
        out.push_str(&format!("/{}'", index));
    }
    out
}
