//! Option resolution
//!
//! A command option is taken from the command line if given, then from a
//! fallback such as the profile's own address, and finally asked for
//! interactively. With prompting disabled a missing option is an error.

pub mod prompt;
pub mod validators;

use bip39::Mnemonic;
use thiserror::Error;

use crate::crypto::{Password, PublicKey};
use crate::model::transaction::HashType;
use crate::model::{
    relative_to_absolute, AccountRestrictionFlags, ActionType, Address, Mosaic, MosaicId,
    NetworkType, PublicAccount, UnresolvedMosaicId,
};
use crate::profile::ImportType;

pub use prompt::{DialoguerPrompter, Prompter};

/// Attempts before an invalid prompted answer becomes an error
const MAX_PROMPT_ATTEMPTS: usize = 3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Missing option: {0}")]
    MissingOption(String),
    #[error("Invalid option {name}: {reason}")]
    InvalidOption { name: String, reason: String },
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

pub type ResolveResult<T> = Result<T, ResolveError>;

/// How to ask for an option
pub enum Ask<'a> {
    Text {
        message: &'a str,
        default: Option<&'a str>,
    },
    Password {
        message: &'a str,
    },
    Select {
        message: &'a str,
        items: Vec<String>,
        default: usize,
    },
}

/// Resolves options from values, fallbacks and prompts
pub struct OptionsResolver<'a> {
    prompter: &'a dyn Prompter,
    allow_prompt: bool,
}

impl<'a> OptionsResolver<'a> {
    pub fn new(prompter: &'a dyn Prompter, allow_prompt: bool) -> Self {
        Self {
            prompter,
            allow_prompt,
        }
    }

    pub fn prompter(&self) -> &dyn Prompter {
        self.prompter
    }

    pub fn allows_prompt(&self) -> bool {
        self.allow_prompt
    }

    fn ask(&self, ask: &Ask<'_>) -> ResolveResult<String> {
        match ask {
            Ask::Text { message, default } => self.prompter.text(message, *default),
            Ask::Password { message } => self.prompter.password(message),
            Ask::Select {
                message,
                items,
                default,
            } => {
                let index = self.prompter.select(message, items, *default)?;
                items
                    .get(index)
                    .cloned()
                    .ok_or_else(|| ResolveError::Prompt(format!("no item {}", index)))
            }
        }
    }

    /// Resolve an option: value, then fallback, then prompt
    pub fn resolve_option<T>(
        &self,
        name: &str,
        value: Option<&str>,
        fallback: Option<T>,
        ask: Ask<'_>,
        validate: impl Fn(&str) -> Result<T, String>,
    ) -> ResolveResult<T> {
        if let Some(value) = value {
            return validate(value).map_err(|reason| ResolveError::InvalidOption {
                name: name.to_string(),
                reason,
            });
        }
        if let Some(fallback) = fallback {
            return Ok(fallback);
        }
        if !self.allow_prompt {
            return Err(ResolveError::MissingOption(name.to_string()));
        }

        let mut last_reason = String::new();
        for _ in 0..MAX_PROMPT_ATTEMPTS {
            let answer = self.ask(&ask)?;
            match validate(&answer) {
                Ok(parsed) => return Ok(parsed),
                Err(reason) => {
                    eprintln!("{}", crate::service::formatter::error(&reason));
                    last_reason = reason;
                }
            }
        }
        Err(ResolveError::InvalidOption {
            name: name.to_string(),
            reason: last_reason,
        })
    }

    fn text<T>(
        &self,
        name: &str,
        value: Option<&str>,
        message: &str,
        validate: impl Fn(&str) -> Result<T, String>,
    ) -> ResolveResult<T> {
        self.resolve_option(
            name,
            value,
            None,
            Ask::Text {
                message,
                default: None,
            },
            validate,
        )
    }

    fn select<T>(
        &self,
        name: &str,
        value: Option<&str>,
        message: &str,
        items: Vec<String>,
        validate: impl Fn(&str) -> Result<T, String>,
    ) -> ResolveResult<T> {
        self.resolve_option(
            name,
            value,
            None,
            Ask::Select {
                message,
                items,
                default: 0,
            },
            validate,
        )
    }

    // =========================================================================
    // Resolvers
    // =========================================================================

    pub fn address(
        &self,
        name: &str,
        value: Option<&str>,
        fallback: Option<Address>,
        message: &str,
    ) -> ResolveResult<Address> {
        self.resolve_option(
            name,
            value,
            fallback,
            Ask::Text {
                message,
                default: None,
            },
            validators::address,
        )
    }

    pub fn public_key(&self, name: &str, value: Option<&str>, message: &str) -> ResolveResult<PublicKey> {
        self.text(name, value, message, validators::public_key)
    }

    pub fn public_account(
        &self,
        name: &str,
        value: Option<&str>,
        network_type: NetworkType,
        message: &str,
    ) -> ResolveResult<PublicAccount> {
        self.public_key(name, value, message)
            .map(|key| PublicAccount::new(key, network_type))
    }

    pub fn private_key(&self, value: Option<&str>) -> ResolveResult<String> {
        self.resolve_option(
            "privateKey",
            value,
            None,
            Ask::Password {
                message: "Enter your account private key:",
            },
            validators::private_key,
        )
    }

    pub fn hash(&self, value: Option<&str>, message: &str) -> ResolveResult<String> {
        self.text("hash", value, message, validators::transaction_hash)
    }

    pub fn mosaic_id(&self, value: Option<&str>) -> ResolveResult<MosaicId> {
        self.text(
            "mosaicId",
            value,
            "Enter the mosaic id in hexadecimal format:",
            validators::mosaic_id,
        )
    }

    pub fn mosaic_id_alias(&self, value: Option<&str>) -> ResolveResult<UnresolvedMosaicId> {
        self.text(
            "mosaicId",
            value,
            "Enter the mosaic id or @alias:",
            validators::mosaic_id_alias,
        )
    }

    pub fn metadata_key(&self, value: Option<&str>) -> ResolveResult<u64> {
        self.text(
            "key",
            value,
            "Enter a key (hexadecimal, at most 16 characters):",
            validators::metadata_key,
        )
    }

    pub fn string_value(&self, name: &str, value: Option<&str>, message: &str) -> ResolveResult<String> {
        self.text(name, value, message, |v| Ok(v.to_string()))
    }

    pub fn max_fee(&self, value: Option<&str>) -> ResolveResult<u64> {
        self.resolve_option(
            "maxFee",
            value,
            None,
            Ask::Text {
                message: "Enter the maximum fee (absolute amount):",
                default: Some("0"),
            },
            validators::max_fee,
        )
    }

    pub fn password(&self, value: Option<&str>) -> ResolveResult<Password> {
        self.resolve_option(
            "password",
            value,
            None,
            Ask::Password {
                message: "Enter your wallet password:",
            },
            validators::password,
        )
    }

    pub fn new_password(&self, value: Option<&str>) -> ResolveResult<Password> {
        self.resolve_option(
            "newPassword",
            value,
            None,
            Ask::Password {
                message: "Enter your new wallet password:",
            },
            validators::password,
        )
    }

    pub fn network(&self, value: Option<&str>) -> ResolveResult<NetworkType> {
        self.select(
            "network",
            value,
            "Select a network type:",
            NetworkType::ALL.iter().map(|n| n.name().to_string()).collect(),
            validators::network_type,
        )
    }

    pub fn url(&self, value: Option<&str>) -> ResolveResult<String> {
        self.resolve_option(
            "url",
            value,
            None,
            Ask::Text {
                message: "Enter a Symbol node url:",
                default: Some("http://localhost:3000"),
            },
            validators::url,
        )
    }

    pub fn profile_name(&self, value: Option<&str>) -> ResolveResult<String> {
        self.text(
            "profile",
            value,
            "Enter your wallet name:",
            validators::profile_name,
        )
    }

    /// The flag is only asked for when it was not given on the command line
    pub fn default_flag(&self, value: bool) -> ResolveResult<bool> {
        if value || !self.allow_prompt {
            return Ok(value);
        }
        self.prompter
            .confirm("Do you want to set the account as the default profile?", false)
    }

    pub fn import_type(&self, value: Option<&str>) -> ResolveResult<ImportType> {
        self.select(
            "importType",
            value,
            "Select the import type:",
            ImportType::ALL.iter().map(|t| t.to_string()).collect(),
            validators::import_type,
        )
    }

    pub fn mnemonic(&self, value: Option<&str>) -> ResolveResult<Mnemonic> {
        self.resolve_option(
            "mnemonic",
            value,
            None,
            Ask::Password {
                message: "Enter your mnemonic:",
            },
            validators::mnemonic,
        )
    }

    pub fn path_number(&self, value: Option<&str>) -> ResolveResult<u32> {
        self.resolve_option(
            "pathNumber",
            value,
            None,
            Ask::Text {
                message: "Enter the path number:",
                default: Some("0"),
            },
            validators::path_number,
        )
    }

    pub fn action(&self, value: Option<&str>) -> ResolveResult<ActionType> {
        self.select(
            "action",
            value,
            "Select an action:",
            vec![ActionType::Add.to_string(), ActionType::Remove.to_string()],
            validators::action_type,
        )
    }

    pub fn restriction_flags(&self, value: Option<&str>) -> ResolveResult<AccountRestrictionFlags> {
        self.select(
            "flags",
            value,
            "Select the restriction flags:",
            vec!["AllowMosaic".to_string(), "BlockMosaic".to_string()],
            validators::restriction_mosaic_flags,
        )
    }

    /// Relative amount converted to absolute units
    pub fn amount(&self, value: Option<&str>, divisibility: u8) -> ResolveResult<u64> {
        self.text("amount", value, "Enter the relative amount:", |v| {
            relative_to_absolute(v, divisibility).map_err(|e| e.to_string())
        })
    }

    pub fn duration(&self, value: Option<&str>) -> ResolveResult<u64> {
        self.text(
            "duration",
            value,
            "Enter the duration in number of blocks:",
            validators::positive_integer,
        )
    }

    pub fn hash_type(&self, value: Option<&str>) -> ResolveResult<HashType> {
        self.select(
            "hashAlgorithm",
            value,
            "Select the hash algorithm:",
            [HashType::Sha3_256, HashType::Hash160, HashType::Hash256]
                .iter()
                .map(|h| h.name().to_string())
                .collect(),
            validators::hash_type,
        )
    }

    pub fn secret(&self, value: Option<&str>, hash_type: HashType) -> ResolveResult<String> {
        self.text("secret", value, "Enter the proof hashed in hexadecimal format:", |v| {
            validators::secret(v, hash_type)
        })
    }

    /// Messages are optional: without a prompt the message is empty
    pub fn message(&self, value: Option<&str>) -> ResolveResult<String> {
        if value.is_none() && !self.allow_prompt {
            return Ok(String::new());
        }
        self.resolve_option(
            "message",
            value,
            None,
            Ask::Text {
                message: "Enter a message:",
                default: Some(""),
            },
            |v| Ok(v.to_string()),
        )
    }

    pub fn mosaics(&self, value: Option<&str>) -> ResolveResult<Vec<Mosaic>> {
        self.text(
            "mosaics",
            value,
            "Mosaics to transfer in the format (mosaicId(hex)|@aliasName)::absoluteAmount, (Ex: @symbol.xym::1000000,6BED913FA20223F8::1):",
            validators::mosaics,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::prompt::ScriptedPrompter;
    use super::*;

    #[test]
    fn test_value_wins_over_fallback() {
        let prompter = ScriptedPrompter::new(&[]);
        let resolver = OptionsResolver::new(&prompter, true);
        let fallback: Address = validators::address(
            &crate::model::Account::generate(NetworkType::Testnet).address().plain(),
        )
        .unwrap();
        let other = crate::model::Account::generate(NetworkType::Testnet).address();

        let resolved = resolver
            .address("address", Some(&other.plain()), Some(fallback), "Address:")
            .unwrap();
        assert_eq!(resolved, other);

        let resolved = resolver
            .address("address", None, Some(fallback), "Address:")
            .unwrap();
        assert_eq!(resolved, fallback);
        assert!(prompter.asked.borrow().is_empty());
    }

    #[test]
    fn test_invalid_value_is_error() {
        let prompter = ScriptedPrompter::new(&[]);
        let resolver = OptionsResolver::new(&prompter, true);
        assert!(matches!(
            resolver.hash(Some("abc"), "Hash:"),
            Err(ResolveError::InvalidOption { .. })
        ));
    }

    #[test]
    fn test_missing_without_prompt() {
        let prompter = ScriptedPrompter::new(&[]);
        let resolver = OptionsResolver::new(&prompter, false);
        assert_eq!(
            resolver.hash(None, "Hash:").unwrap_err(),
            ResolveError::MissingOption("hash".to_string())
        );
        assert_eq!(resolver.message(None).unwrap(), "");
        assert!(!resolver.default_flag(false).unwrap());
    }

    #[test]
    fn test_prompt_retries_until_valid() {
        let hash = "ab".repeat(32);
        let prompter = ScriptedPrompter::new(&["nope", &hash]);
        let resolver = OptionsResolver::new(&prompter, true);
        assert_eq!(resolver.hash(None, "Hash:").unwrap(), hash.to_ascii_uppercase());
        assert_eq!(prompter.asked.borrow().len(), 2);
    }

    #[test]
    fn test_prompt_gives_up() {
        let prompter = ScriptedPrompter::new(&["1", "2", "3"]);
        let resolver = OptionsResolver::new(&prompter, true);
        assert!(matches!(
            resolver.password(None),
            Err(ResolveError::InvalidOption { .. })
        ));
    }

    #[test]
    fn test_select_resolvers() {
        let prompter = ScriptedPrompter::new(&["TEST_NET", "Mnemonic", "BlockMosaic", "Op_Hash_160"]);
        let resolver = OptionsResolver::new(&prompter, true);
        assert_eq!(resolver.network(None).unwrap(), NetworkType::Testnet);
        assert_eq!(resolver.import_type(None).unwrap(), ImportType::Mnemonic);
        assert_eq!(
            resolver.restriction_flags(None).unwrap(),
            AccountRestrictionFlags::BLOCK_MOSAIC
        );
        assert_eq!(resolver.hash_type(None).unwrap(), HashType::Hash160);
    }

    #[test]
    fn test_amount_and_defaults() {
        let prompter = ScriptedPrompter::new(&["", ""]);
        let resolver = OptionsResolver::new(&prompter, true);
        assert_eq!(resolver.amount(Some("1.5"), 6).unwrap(), 1_500_000);
        assert_eq!(resolver.max_fee(None).unwrap(), 0);
        assert_eq!(resolver.url(None).unwrap(), "http://localhost:3000");
    }
}
