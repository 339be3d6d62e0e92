//! Symbol CLI: a command-line wallet for Symbol-style networks
//!
//! This crate provides:
//! - Encrypted profiles backed by a private key or a BIP39 mnemonic
//! - Transfer, metadata, restriction and secret lock transactions
//! - Multisig announcing through aggregate complete or bonded transactions
//! - Cosigning of pending aggregate bonded transactions found on the
//!   profile account or any multisig account it cosigns for
//! - A REST gateway client behind async repository traits
//!
//! # Example
//!
//! ```rust
//! use symbol_cli::model::{Account, NetworkType, Transaction, TransactionBody};
//! use symbol_cli::model::transaction::TransferBody;
//! use symbol_cli::model::Deadline;
//!
//! let account = Account::generate(NetworkType::Testnet);
//! let transfer = Transaction::new(
//!     NetworkType::Testnet,
//!     Deadline(1),
//!     0,
//!     TransactionBody::Transfer(TransferBody {
//!         recipient: account.address(),
//!         mosaics: vec![],
//!         message: Some("hello".to_string()),
//!     }),
//! );
//! let generation_hash = "57F7DA205008026C776CB6AED843393F04CD458E0AA2D9F1D5F31A402072B2D6";
//! let signed = account.sign(&transfer, generation_hash).unwrap();
//! assert_eq!(signed.hash.len(), 64);
//! ```

pub mod cli;
pub mod crypto;
pub mod model;
pub mod profile;
pub mod repository;
pub mod resolver;
pub mod service;
pub mod settings;
pub mod view;

// Re-export commonly used types
pub use crypto::{KeyPair, Password, PublicKey};
pub use model::{Account, Address, NetworkType, Transaction};
pub use profile::{Profile, ProfileStore};
pub use repository::{Repositories, RestClient};
pub use settings::Settings;
