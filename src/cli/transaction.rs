//! Transaction commands
//!
//! Every command builds its transactions, signs them through the signature
//! service and hands them to the announce service. `cosign` instead looks up
//! a pending aggregate bonded transaction and announces a cosignature.

use clap::Args;

use crate::model::transaction::{
    AccountMosaicRestrictionBody, SecretLockBody, TransferBody,
};
use crate::model::{ActionType, Address, Mosaic, NetworkType, Transaction, TransactionBody};
use crate::profile::Profile;
use crate::repository::{QueryParams, Repositories};
use crate::service::{
    formatter, AnnounceOptions, AnnounceService, MetadataTarget, MetadataTransactionService,
    MultisigService, MultisigSigner, SequentialFetcher, SignatureRequest, Spinner,
    TransactionSignatureService,
};
use crate::view::{TransactionStatusView, TransactionView};

use super::{AppState, CliResult};

/// Options shared by commands that announce transactions
#[derive(Args, Debug, Clone, Default)]
pub struct AnnounceArgs {
    /// Profile password
    #[arg(short, long)]
    pub password: Option<String>,

    /// Maximum fee in absolute units
    #[arg(short = 'f', long)]
    pub max_fee: Option<String>,

    /// Public key of the multisig account to announce for
    #[arg(long)]
    pub multisig: Option<String>,

    /// Announce without asking for confirmation
    #[arg(long)]
    pub announce: bool,

    /// Wait until the transaction is confirmed
    #[arg(long)]
    pub sync: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct TransferArgs {
    /// Recipient address
    #[arg(short, long)]
    pub recipient_address: Option<String>,

    /// Mosaics as (mosaicId|@alias)::absoluteAmount, comma separated
    #[arg(short, long)]
    pub mosaics: Option<String>,

    /// Plain message
    #[arg(long)]
    pub message: Option<String>,

    #[command(flatten)]
    pub announce: AnnounceArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct AccountMetadataArgs {
    /// Address of the account the metadata is attached to
    #[arg(short, long)]
    pub target_address: Option<String>,

    /// Metadata key in hexadecimal
    #[arg(short, long)]
    pub key: Option<String>,

    /// Metadata value
    #[arg(long)]
    pub value: Option<String>,

    #[command(flatten)]
    pub announce: AnnounceArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct MosaicMetadataArgs {
    /// Mosaic id in hexadecimal
    #[arg(short, long)]
    pub mosaic_id: Option<String>,

    /// Metadata key in hexadecimal
    #[arg(short, long)]
    pub key: Option<String>,

    /// Metadata value
    #[arg(long)]
    pub value: Option<String>,

    #[command(flatten)]
    pub announce: AnnounceArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct MosaicRestrictionArgs {
    /// AllowMosaic or BlockMosaic
    #[arg(long)]
    pub flags: Option<String>,

    /// Add or Remove
    #[arg(short, long)]
    pub action: Option<String>,

    /// Mosaic id or @alias
    #[arg(short, long)]
    pub mosaic_id: Option<String>,

    #[command(flatten)]
    pub announce: AnnounceArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct SecretLockArgs {
    /// Address that can claim the funds
    #[arg(short, long)]
    pub recipient_address: Option<String>,

    /// Mosaic id or @alias
    #[arg(short, long)]
    pub mosaic_id: Option<String>,

    /// Absolute amount to lock
    #[arg(long)]
    pub amount: Option<String>,

    /// Blocks until the lock expires
    #[arg(short, long)]
    pub duration: Option<String>,

    /// Proof hashed with the hash algorithm
    #[arg(short, long)]
    pub secret: Option<String>,

    /// Op_Sha3_256, Op_Hash_160 or Op_Hash_256
    #[arg(long)]
    pub hash_algorithm: Option<String>,

    #[command(flatten)]
    pub announce: AnnounceArgs,
}

// =============================================================================
// Signing and announcing
// =============================================================================

/// Everything a command needs to sign for the selected profile
struct Session {
    profile: Profile,
    repositories: Repositories,
    signer: TransactionSignatureService,
    multisig: Option<MultisigSigner>,
}

impl Session {
    async fn open(state: &AppState, args: &AnnounceArgs) -> CliResult<Self> {
        let profile = state.profile()?;
        let repositories = state.repositories(profile.url())?;
        let signer = TransactionSignatureService::new(&profile, &state.settings);
        let multisig = resolve_multisig(state, &repositories, args, profile.network_type()).await?;
        Ok(Self {
            profile,
            repositories,
            signer,
            multisig,
        })
    }

    /// Address the transactions act for: the multisig account if any
    fn source_address(&self) -> Address {
        self.multisig
            .as_ref()
            .map_or(self.profile.address, |m| m.account.address)
    }

    fn transaction(&self, body: TransactionBody) -> Transaction {
        Transaction::new(self.signer.network_type(), self.signer.deadline(), 0, body)
    }

    async fn sign_and_announce(
        self,
        state: &AppState,
        args: &AnnounceArgs,
        transactions: Vec<Transaction>,
        aggregate: Option<bool>,
    ) -> CliResult<()> {
        let resolver = state.resolver();
        let max_fee = resolver.max_fee(args.max_fee.as_deref())?;
        let password = resolver.password(args.password.as_deref())?;
        let account = self.profile.decrypt(&password)?;

        let signed = self.signer.sign_transactions(SignatureRequest {
            account: &account,
            transactions,
            max_fee,
            multisig: self.multisig,
            is_aggregate: aggregate.is_some(),
            is_aggregate_bonded: aggregate.unwrap_or(false),
        })?;

        for tx in &signed {
            let transaction = tx.transaction()?;
            println!(
                "{}",
                TransactionView::new(&transaction)
                    .with_epoch_adjustment(self.profile.epoch_adjustment())
            );
        }

        let options = AnnounceOptions {
            announce: args.announce,
            sync: args.sync,
        };
        AnnounceService::new(self.repositories.transaction.clone(), &state.settings)
            .run(&signed, options, &resolver)
            .await?;
        Ok(())
    }
}

async fn resolve_multisig(
    state: &AppState,
    repositories: &Repositories,
    args: &AnnounceArgs,
    network_type: NetworkType,
) -> CliResult<Option<MultisigSigner>> {
    let Some(multisig) = args.multisig.as_deref() else {
        return Ok(None);
    };
    let public_key = state.resolver().public_key(
        "multisig",
        Some(multisig),
        "Enter the multisig account public key:",
    )?;
    let service = MultisigService::new(repositories.multisig.clone());
    match service.signer_multisig_info(&public_key, network_type).await? {
        Some(signer) => Ok(Some(signer)),
        None => Err(format!("The account {} is not a multisig account", public_key).into()),
    }
}

// =============================================================================
// Commands
// =============================================================================

/// Send mosaics and a message to an address
pub async fn cmd_transaction_transfer(state: &AppState, args: &TransferArgs) -> CliResult<()> {
    let session = Session::open(state, &args.announce).await?;
    let resolver = state.resolver();
    let recipient = resolver.address(
        "recipientAddress",
        args.recipient_address.as_deref(),
        None,
        "Enter the recipient address:",
    )?;
    let mosaics = resolver.mosaics(args.mosaics.as_deref())?;
    let message = resolver.message(args.message.as_deref())?;

    let body = TransactionBody::Transfer(TransferBody {
        recipient,
        mosaics,
        message: Some(message).filter(|m| !m.is_empty()),
    });
    let transaction = session.transaction(body);
    session
        .sign_and_announce(state, &args.announce, vec![transaction], None)
        .await
}

/// Set a metadata value on an account. Metadata on another account needs
/// its cosignature, so it goes out as an aggregate bonded transaction.
pub async fn cmd_transaction_account_metadata(
    state: &AppState,
    args: &AccountMetadataArgs,
) -> CliResult<()> {
    let session = Session::open(state, &args.announce).await?;
    let resolver = state.resolver();
    let source = session.source_address();
    let target = resolver.address(
        "targetAddress",
        args.target_address.as_deref(),
        None,
        "Enter the target account address:",
    )?;
    let key = resolver.metadata_key(args.key.as_deref())?;
    let value = resolver.string_value("value", args.value.as_deref(), "Enter the metadata value:")?;

    let transaction = MetadataTransactionService::new(session.repositories.metadata.clone())
        .create_metadata_transaction(
            MetadataTarget::Account,
            session.signer.network_type(),
            session.signer.deadline(),
            &target,
            key,
            value.as_bytes(),
            &source,
        )
        .await?;
    let bonded = target != source;
    session
        .sign_and_announce(state, &args.announce, vec![transaction], Some(bonded))
        .await
}

/// Set a metadata value on a mosaic, targeting the mosaic owner
pub async fn cmd_transaction_mosaic_metadata(
    state: &AppState,
    args: &MosaicMetadataArgs,
) -> CliResult<()> {
    let session = Session::open(state, &args.announce).await?;
    let resolver = state.resolver();
    let source = session.source_address();
    let mosaic_id = resolver.mosaic_id(args.mosaic_id.as_deref())?;
    let key = resolver.metadata_key(args.key.as_deref())?;
    let value = resolver.string_value("value", args.value.as_deref(), "Enter the metadata value:")?;

    let owner = match session.repositories.mosaic.mosaic_info(mosaic_id).await? {
        Some(info) => info.owner_address,
        None => {
            return Err(format!("No mosaic exists with this id {}", mosaic_id.to_hex()).into())
        }
    };

    let transaction = MetadataTransactionService::new(session.repositories.metadata.clone())
        .create_metadata_transaction(
            MetadataTarget::Mosaic(mosaic_id.into()),
            session.signer.network_type(),
            session.signer.deadline(),
            &owner,
            key,
            value.as_bytes(),
            &source,
        )
        .await?;
    let bonded = owner != source;
    session
        .sign_and_announce(state, &args.announce, vec![transaction], Some(bonded))
        .await
}

/// Allow or block incoming transactions carrying a mosaic
pub async fn cmd_transaction_account_mosaic_restriction(
    state: &AppState,
    args: &MosaicRestrictionArgs,
) -> CliResult<()> {
    let session = Session::open(state, &args.announce).await?;
    let resolver = state.resolver();
    let flags = resolver.restriction_flags(args.flags.as_deref())?;
    let action = resolver.action(args.action.as_deref())?;
    let mosaic_id = resolver.mosaic_id_alias(args.mosaic_id.as_deref())?;

    let (additions, deletions) = match action {
        ActionType::Add => (vec![mosaic_id], vec![]),
        ActionType::Remove => (vec![], vec![mosaic_id]),
    };
    let body = TransactionBody::AccountMosaicRestriction(AccountMosaicRestrictionBody {
        flags,
        additions,
        deletions,
    });
    let transaction = session.transaction(body);
    session
        .sign_and_announce(state, &args.announce, vec![transaction], None)
        .await
}

/// Lock funds that the recipient can claim by revealing the proof
pub async fn cmd_transaction_secret_lock(state: &AppState, args: &SecretLockArgs) -> CliResult<()> {
    let session = Session::open(state, &args.announce).await?;
    let resolver = state.resolver();
    let recipient = resolver.address(
        "recipientAddress",
        args.recipient_address.as_deref(),
        None,
        "Enter the recipient address:",
    )?;
    let mosaic_id = resolver.mosaic_id_alias(args.mosaic_id.as_deref())?;
    let amount = resolver.amount(args.amount.as_deref(), 0)?;
    let duration = resolver.duration(args.duration.as_deref())?;
    let hash_type = resolver.hash_type(args.hash_algorithm.as_deref())?;
    let secret = resolver.secret(args.secret.as_deref(), hash_type)?;

    let body = TransactionBody::SecretLock(SecretLockBody {
        recipient,
        mosaic: Mosaic::new(mosaic_id, amount),
        duration,
        hash_type,
        secret,
    });
    let transaction = session.transaction(body);
    session
        .sign_and_announce(state, &args.announce, vec![transaction], None)
        .await
}

/// Print the status of a transaction
pub async fn cmd_transaction_status(state: &AppState, hash: Option<&str>) -> CliResult<()> {
    let profile = state.profile()?;
    let hash = state.resolver().hash(hash, "Enter the transaction hash:")?;
    let repositories = state.repositories(profile.url())?;

    let spinner = Spinner::new("Fetching transaction status");
    spinner.start();
    let status = repositories.transaction.status(&hash).await;
    spinner.stop();

    println!("{}", TransactionStatusView::new(&status?));
    Ok(())
}

/// Cosign a pending aggregate bonded transaction
///
/// The partial transactions of the profile account and of every multisig
/// account it cosigns for are fetched one address at a time until the
/// requested hash shows up.
pub async fn cmd_transaction_cosign(
    state: &AppState,
    hash: Option<&str>,
    password: Option<&str>,
) -> CliResult<()> {
    let profile = state.profile()?;
    let resolver = state.resolver();
    let hash = resolver.hash(hash, "Enter the aggregate bonded transaction hash to cosign:")?;
    let repositories = state.repositories(profile.url())?;

    let spinner = Spinner::new("Looking for the transaction to cosign");
    spinner.start();
    let found = find_partial_transaction(state, &repositories, &profile, &hash).await;
    spinner.stop();

    let Some(transaction) = found? else {
        return Err(format!("No aggregate bonded transaction found with hash {}", hash).into());
    };

    println!("{}", formatter::title("Transaction to cosign:"));
    println!(
        "{}",
        TransactionView::new(&transaction).with_epoch_adjustment(profile.epoch_adjustment())
    );

    let password = resolver.password(password)?;
    let cosignature = profile
        .decrypt(&password)
        .map_err(|e| e.to_string())
        .and_then(|account| {
            account
                .sign_cosignature_transaction(&transaction)
                .map_err(|e| e.to_string())
        });
    let cosignature = match cosignature {
        Ok(cosignature) => cosignature,
        Err(reason) => {
            log::debug!("Cosigning {} failed: {}", hash, reason);
            println!(
                "{}",
                formatter::error(&format!(
                    "The profile {} cannot cosign the transaction with hash {}",
                    profile.name, hash
                ))
            );
            return Ok(());
        }
    };

    let spinner = Spinner::new("Announcing cosignature");
    spinner.start();
    let announced = repositories.transaction.announce_cosignature(&cosignature).await;
    spinner.stop();
    announced?;

    println!(
        "{}",
        formatter::success("Transaction cosigned and announced correctly")
    );
    Ok(())
}

async fn find_partial_transaction(
    state: &AppState,
    repositories: &Repositories,
    profile: &Profile,
    hash: &str,
) -> CliResult<Option<Transaction>> {
    let addresses = MultisigService::new(repositories.multisig.clone())
        .self_and_children_addresses(&profile.address)
        .await?;

    let account = repositories.account.clone();
    let query = QueryParams::with_page_size(state.settings.page_size);
    let fetcher = SequentialFetcher::new(move |address| {
        let account = account.clone();
        async move { account.partial_transactions(&address, &query).await }
    });
    Ok(fetcher
        .find_first(addresses, |tx: &Transaction| {
            tx.hash().is_some_and(|h| h.eq_ignore_ascii_case(hash))
        })
        .await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::testing::{state, store_profile, PASSWORD};
    use crate::model::transaction::InnerTransaction;
    use crate::model::{
        Account, Deadline, MosaicFlags, MosaicId, MosaicInfo, MultisigAccountInfo,
        TransactionInfo, TransactionType,
    };
    use crate::service::testing::FakeNetwork;
    use tempfile::TempDir;

    fn partial(hash: &str, signer: &Account) -> Transaction {
        let mut tx = Transaction::aggregate(
            NetworkType::Testnet,
            Deadline(1),
            0,
            vec![InnerTransaction {
                signer: signer.public_key(),
                body: TransactionBody::Transfer(TransferBody {
                    recipient: signer.address(),
                    mosaics: vec![],
                    message: None,
                }),
            }],
            true,
        );
        tx.signer = Some(signer.public_key());
        tx.info = Some(TransactionInfo {
            hash: Some(hash.to_string()),
            ..Default::default()
        });
        tx
    }

    fn announce_args() -> AnnounceArgs {
        AnnounceArgs {
            password: Some(PASSWORD.to_string()),
            max_fee: Some("100".to_string()),
            announce: true,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_cosign_finds_transaction_of_child_multisig() {
        let dir = TempDir::new().unwrap();
        let fake = FakeNetwork::default();
        let state = state(&dir, &fake, &[]);
        let me = Account::generate(NetworkType::Testnet);
        let multisig_a = Account::generate(NetworkType::Testnet);
        let multisig_b = Account::generate(NetworkType::Testnet);
        let multisig_c = Account::generate(NetworkType::Testnet);
        store_profile(&state, "alice", &me);

        fake.add_multisig(MultisigAccountInfo {
            account_address: me.address(),
            min_approval: 0,
            min_removal: 0,
            cosignatory_addresses: vec![],
            multisig_addresses: vec![
                multisig_a.address(),
                multisig_b.address(),
                multisig_c.address(),
            ],
        });
        let hash = "AB".repeat(32);
        fake.add_partial(multisig_a.address(), partial(&"CD".repeat(32), &multisig_a));
        fake.add_partial(multisig_b.address(), partial(&hash, &multisig_b));
        fake.add_partial(multisig_c.address(), partial(&hash, &multisig_c));

        cmd_transaction_cosign(&state, Some(&hash), Some(PASSWORD))
            .await
            .unwrap();

        let fake_state = fake.state();
        // Fetching stops at the first match
        assert_eq!(
            fake_state.partial_calls,
            vec![me.address(), multisig_a.address(), multisig_b.address()]
        );
        assert_eq!(fake_state.cosignatures.len(), 1);
        let cosignature = &fake_state.cosignatures[0];
        assert_eq!(cosignature.parent_hash, hash);
        assert_eq!(cosignature.signer_public_key, me.public_key());
        assert!(cosignature.verify());
    }

    #[tokio::test]
    async fn test_cosign_not_found() {
        let dir = TempDir::new().unwrap();
        let fake = FakeNetwork::default();
        let state = state(&dir, &fake, &[]);
        let me = Account::generate(NetworkType::Testnet);
        store_profile(&state, "alice", &me);

        let err = cmd_transaction_cosign(&state, Some(&"AB".repeat(32)), Some(PASSWORD))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("No aggregate bonded transaction found"));
        assert!(fake.state().cosignatures.is_empty());
    }

    #[tokio::test]
    async fn test_cosign_wrong_password_stops() {
        let dir = TempDir::new().unwrap();
        let fake = FakeNetwork::default();
        let state = state(&dir, &fake, &[]);
        let me = Account::generate(NetworkType::Testnet);
        store_profile(&state, "alice", &me);
        let hash = "AB".repeat(32);
        fake.add_partial(me.address(), partial(&hash, &me));

        cmd_transaction_cosign(&state, Some(&hash), Some("not-the-password"))
            .await
            .unwrap();
        assert!(fake.state().cosignatures.is_empty());
        assert!(fake.state().announced.is_empty());
    }

    #[tokio::test]
    async fn test_cosign_announce_failure_is_an_error() {
        let dir = TempDir::new().unwrap();
        let fake = FakeNetwork::default();
        let state = state(&dir, &fake, &[]);
        let me = Account::generate(NetworkType::Testnet);
        store_profile(&state, "alice", &me);
        let hash = "AB".repeat(32);
        fake.add_partial(me.address(), partial(&hash, &me));
        fake.state().fail_announce = true;

        assert!(cmd_transaction_cosign(&state, Some(&hash), Some(PASSWORD))
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_transfer_is_announced() {
        let dir = TempDir::new().unwrap();
        let fake = FakeNetwork::default();
        let state = state(&dir, &fake, &[]);
        store_profile(&state, "alice", &Account::generate(NetworkType::Testnet));
        let args = TransferArgs {
            recipient_address: Some(Account::generate(NetworkType::Testnet).address().plain()),
            mosaics: Some("@symbol.xym::1000000".to_string()),
            message: Some("hello".to_string()),
            announce: announce_args(),
        };

        cmd_transaction_transfer(&state, &args).await.unwrap();
        let announced = fake.state().announced.clone();
        assert_eq!(announced.len(), 1);
        assert_eq!(announced[0].0, "/transactions");
    }

    #[tokio::test]
    async fn test_metadata_on_other_account_is_bonded() {
        let dir = TempDir::new().unwrap();
        let fake = FakeNetwork::default();
        let state = state(&dir, &fake, &[]);
        let me = Account::generate(NetworkType::Testnet);
        store_profile(&state, "alice", &me);

        let own = AccountMetadataArgs {
            target_address: Some(me.address().plain()),
            key: Some("A1".to_string()),
            value: Some("v".to_string()),
            announce: announce_args(),
        };
        cmd_transaction_account_metadata(&state, &own).await.unwrap();
        assert_eq!(fake.state().announced.len(), 1);

        let other = AccountMetadataArgs {
            target_address: Some(Account::generate(NetworkType::Testnet).address().plain()),
            ..own
        };
        cmd_transaction_account_metadata(&state, &other).await.unwrap();
        let announced = fake.state().announced.clone();
        assert_eq!(announced.len(), 3);
        assert_eq!(announced[1].0, "/transactions");
        assert_eq!(announced[2].0, "/transactions/partial");
    }

    fn add_mosaic(fake: &FakeNetwork, id: u64, owner: Address) {
        fake.state().mosaics.insert(
            MosaicId(id),
            MosaicInfo {
                id: MosaicId(id),
                supply: 1,
                start_height: 1,
                owner_address: owner,
                revision: 1,
                flags: MosaicFlags::empty(),
                divisibility: 0,
                duration: 0,
            },
        );
    }

    fn mosaic_metadata_args(mosaic_id: &str) -> MosaicMetadataArgs {
        MosaicMetadataArgs {
            mosaic_id: Some(mosaic_id.to_string()),
            key: Some("A1".to_string()),
            value: Some("v".to_string()),
            announce: announce_args(),
        }
    }

    #[tokio::test]
    async fn test_mosaic_metadata_on_owned_mosaic_is_complete() {
        let dir = TempDir::new().unwrap();
        let fake = FakeNetwork::default();
        let state = state(&dir, &fake, &[]);
        let me = Account::generate(NetworkType::Testnet);
        store_profile(&state, "alice", &me);
        add_mosaic(&fake, 0x6BED913FA20223F8, me.address());

        cmd_transaction_mosaic_metadata(&state, &mosaic_metadata_args("6BED913FA20223F8"))
            .await
            .unwrap();
        let announced = fake.state().announced.clone();
        assert_eq!(announced.len(), 1);
        assert_eq!(announced[0].0, "/transactions");
    }

    #[tokio::test]
    async fn test_mosaic_metadata_on_foreign_mosaic_is_bonded() {
        let dir = TempDir::new().unwrap();
        let fake = FakeNetwork::default();
        let state = state(&dir, &fake, &[]);
        store_profile(&state, "alice", &Account::generate(NetworkType::Testnet));
        let owner = Account::generate(NetworkType::Testnet);
        add_mosaic(&fake, 0x6BED913FA20223F8, owner.address());

        cmd_transaction_mosaic_metadata(&state, &mosaic_metadata_args("6BED913FA20223F8"))
            .await
            .unwrap();
        let announced = fake.state().announced.clone();
        assert_eq!(announced.len(), 2);
        assert_eq!(announced[0].0, "/transactions");
        assert_eq!(announced[1].0, "/transactions/partial");
    }

    #[tokio::test]
    async fn test_mosaic_metadata_unknown_mosaic() {
        let dir = TempDir::new().unwrap();
        let fake = FakeNetwork::default();
        let state = state(&dir, &fake, &[]);
        store_profile(&state, "alice", &Account::generate(NetworkType::Testnet));

        let err = cmd_transaction_mosaic_metadata(&state, &mosaic_metadata_args("6BED913FA20223F8"))
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "No mosaic exists with this id 6BED913FA20223F8"
        );
        assert!(fake.state().announced.is_empty());
    }

    #[tokio::test]
    async fn test_multisig_option_requires_multisig_account() {
        let dir = TempDir::new().unwrap();
        let fake = FakeNetwork::default();
        let state = state(&dir, &fake, &[]);
        store_profile(&state, "alice", &Account::generate(NetworkType::Testnet));
        let mut args = TransferArgs {
            recipient_address: Some(Account::generate(NetworkType::Testnet).address().plain()),
            mosaics: Some("@symbol.xym::1".to_string()),
            message: None,
            announce: announce_args(),
        };
        let multisig = Account::generate(NetworkType::Testnet);
        args.announce.multisig = Some(multisig.public_key().to_hex());

        assert!(cmd_transaction_transfer(&state, &args).await.is_err());

        fake.add_multisig(MultisigAccountInfo {
            account_address: multisig.address(),
            min_approval: 1,
            min_removal: 1,
            cosignatory_addresses: vec![],
            multisig_addresses: vec![],
        });
        cmd_transaction_transfer(&state, &args).await.unwrap();
        assert_eq!(fake.state().announced.len(), 1);
    }

    #[tokio::test]
    async fn test_secret_lock_and_restriction() {
        let dir = TempDir::new().unwrap();
        let fake = FakeNetwork::default();
        let state = state(&dir, &fake, &[]);
        store_profile(&state, "alice", &Account::generate(NetworkType::Testnet));

        let lock = SecretLockArgs {
            recipient_address: Some(Account::generate(NetworkType::Testnet).address().plain()),
            mosaic_id: Some("@symbol.xym".to_string()),
            amount: Some("10".to_string()),
            duration: Some("100".to_string()),
            secret: Some("AA".repeat(32)),
            hash_algorithm: Some("Op_Sha3_256".to_string()),
            announce: announce_args(),
        };
        cmd_transaction_secret_lock(&state, &lock).await.unwrap();

        let restriction = MosaicRestrictionArgs {
            flags: Some("AllowMosaic".to_string()),
            action: Some("Add".to_string()),
            mosaic_id: Some("6BED913FA20223F8".to_string()),
            announce: announce_args(),
        };
        cmd_transaction_account_mosaic_restriction(&state, &restriction)
            .await
            .unwrap();
        assert_eq!(fake.state().announced.len(), 2);
    }

    #[test]
    fn test_partial_helper_is_partial() {
        let account = Account::generate(NetworkType::Testnet);
        let tx = partial(&"AB".repeat(32), &account);
        assert!(tx.is_partial());
        assert_eq!(tx.transaction_type(), TransactionType::AggregateBonded);
    }
}
