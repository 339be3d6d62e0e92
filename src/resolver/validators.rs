//! Input validators
//!
//! Each validator parses a raw option value and returns the typed value or
//! a message suitable for showing to the user.

use url::Url;

use crate::crypto::{is_hash_hex, is_key_hex, Password, PublicKey, MIN_PASSWORD_LEN};
use crate::model::{
    parse_mosaics, parse_u64_hex, AccountRestrictionFlags, ActionType, Address, Mosaic, MosaicId,
    NetworkType, UnresolvedMosaicId,
};
use crate::model::transaction::HashType;
use crate::profile::{parse_mnemonic, ImportType};

pub type Validated<T> = Result<T, String>;

pub fn address(value: &str) -> Validated<Address> {
    Address::parse(value.trim()).map_err(|_| format!("Invalid address: {}", value))
}

pub fn public_key(value: &str) -> Validated<PublicKey> {
    let value = value.trim();
    if !is_key_hex(value) {
        return Err("Public key should be a 64 characters hexadecimal string".to_string());
    }
    PublicKey::from_hex(value).map_err(|e| e.to_string())
}

pub fn private_key(value: &str) -> Validated<String> {
    let value = value.trim();
    if !is_key_hex(value) {
        return Err("Private key should be a 64 characters hexadecimal string".to_string());
    }
    Ok(value.to_ascii_uppercase())
}

pub fn transaction_hash(value: &str) -> Validated<String> {
    let value = value.trim();
    if !is_hash_hex(value) {
        return Err("Transaction hash should be a 64 characters hexadecimal string".to_string());
    }
    Ok(value.to_ascii_uppercase())
}

pub fn mosaic_id(value: &str) -> Validated<MosaicId> {
    let value = value.trim();
    if value.len() != 16 {
        return Err("Mosaic id should be a 16 characters hexadecimal string".to_string());
    }
    MosaicId::from_hex(value).map_err(|e| e.to_string())
}

/// Mosaic id in hex or a namespace name prefixed with `@`
pub fn mosaic_id_alias(value: &str) -> Validated<UnresolvedMosaicId> {
    let value = value.trim();
    if value.starts_with('@') {
        value.parse().map_err(|e: crate::model::ModelError| e.to_string())
    } else {
        mosaic_id(value).map(UnresolvedMosaicId::Mosaic)
    }
}

/// Metadata key, up to 16 hex characters
pub fn metadata_key(value: &str) -> Validated<u64> {
    let value = value.trim();
    if value.is_empty() || value.len() > 16 || !value.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err("Key should be a hexadecimal string of at most 16 characters".to_string());
    }
    parse_u64_hex(value).map_err(|e| e.to_string())
}

pub fn url(value: &str) -> Validated<String> {
    let parsed = Url::parse(value.trim()).map_err(|_| format!("Invalid url: {}", value))?;
    match parsed.scheme() {
        "http" | "https" if parsed.host().is_some() => {
            Ok(value.trim().trim_end_matches('/').to_string())
        }
        _ => Err("Url should start with http:// or https://".to_string()),
    }
}

pub fn network_type(value: &str) -> Validated<NetworkType> {
    value.parse().map_err(|e: crate::model::ModelError| e.to_string())
}

pub fn profile_name(value: &str) -> Validated<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("Profile name cannot be empty".to_string());
    }
    Ok(value.to_string())
}

pub fn password(value: &str) -> Validated<Password> {
    let password = Password::new(value);
    if !password.is_strong_enough() {
        return Err(format!(
            "Password should have a minimum of {} characters",
            MIN_PASSWORD_LEN
        ));
    }
    Ok(password)
}

/// An absolute number of fee units
pub fn max_fee(value: &str) -> Validated<u64> {
    value
        .trim()
        .parse()
        .map_err(|_| "Max fee should be a positive integer".to_string())
}

pub fn positive_integer(value: &str) -> Validated<u64> {
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("{} is not a positive integer", value)),
    }
}

pub fn path_number(value: &str) -> Validated<u32> {
    value
        .trim()
        .parse()
        .map_err(|_| "Path number should be a non-negative integer".to_string())
}

pub fn action_type(value: &str) -> Validated<ActionType> {
    value.parse().map_err(|e: crate::model::ModelError| e.to_string())
}

pub fn restriction_mosaic_flags(value: &str) -> Validated<AccountRestrictionFlags> {
    AccountRestrictionFlags::parse_mosaic(value).map_err(|e| e.to_string())
}

pub fn import_type(value: &str) -> Validated<ImportType> {
    value.parse().map_err(|e: crate::profile::ProfileError| e.to_string())
}

pub fn mnemonic(value: &str) -> Validated<bip39::Mnemonic> {
    parse_mnemonic(value).map_err(|e| e.to_string())
}

pub fn hash_type(value: &str) -> Validated<HashType> {
    value.parse().map_err(|e: crate::model::ModelError| e.to_string())
}

/// Secret proof hash, with the length the algorithm produces
pub fn secret(value: &str, hash_type: HashType) -> Validated<String> {
    let value = value.trim();
    if value.len() != hash_type.secret_hex_len() || !value.chars().all(|c| c.is_ascii_hexdigit())
    {
        return Err(format!(
            "Secret should be a {} characters hexadecimal string for {}",
            hash_type.secret_hex_len(),
            hash_type
        ));
    }
    Ok(value.to_ascii_uppercase())
}

/// Comma separated `id::amount` pairs, e.g. `@symbol.xym::1000000,6BED913FA20223F8::1`
pub fn mosaics(value: &str) -> Validated<Vec<Mosaic>> {
    let mosaics = parse_mosaics(value).map_err(|e| e.to_string())?;
    if mosaics.is_empty() {
        return Err("Enter at least one mosaic".to_string());
    }
    Ok(mosaics)
}
