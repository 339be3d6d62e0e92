//! Symbol CLI Application
//!
//! A command-line wallet for Symbol-style networks.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use symbol_cli::cli::account::{self, PageOptions};
use symbol_cli::cli::profile::{self, ImportOptions, ProfileOptions};
use symbol_cli::cli::transaction::{
    self, AccountMetadataArgs, MosaicMetadataArgs, MosaicRestrictionArgs, SecretLockArgs,
    TransferArgs,
};
use symbol_cli::cli::{diagnostic, mosaic, AppState, CliResult};
use symbol_cli::service::formatter;
use symbol_cli::settings::Settings;

#[derive(Parser)]
#[command(name = "symbol-cli")]
#[command(author = "Darshan")]
#[command(version = "0.1.0")]
#[command(about = "Command-line wallet for Symbol-style blockchain networks", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(long, global = true, env = "SYMBOL_CLI_CONFIG")]
    config: Option<PathBuf>,

    /// Profiles file, overriding the configured one
    #[arg(long, global = true)]
    profiles_file: Option<PathBuf>,

    /// Profile to use instead of the default one
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Fail instead of prompting for missing options
    #[arg(long, global = true)]
    no_prompt: bool,

    /// Print debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Profile management
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },

    /// Account queries
    Account {
        #[command(subcommand)]
        action: AccountCommands,
    },

    /// Mosaic queries
    Mosaic {
        #[command(subcommand)]
        action: MosaicCommands,
    },

    /// Node diagnostics
    Diagnostic {
        #[command(subcommand)]
        action: DiagnosticCommands,
    },

    /// Create, announce and cosign transactions
    Transaction {
        #[command(subcommand)]
        action: TransactionCommands,
    },
}

#[derive(Args)]
struct ProfileArgs {
    /// Profile name
    #[arg(short, long)]
    name: Option<String>,

    /// MAIN_NET or TEST_NET
    #[arg(long)]
    network: Option<String>,

    /// Node URL
    #[arg(short, long)]
    url: Option<String>,

    /// Password used to encrypt the private key
    #[arg(short, long)]
    password: Option<String>,

    /// Set the new profile as default
    #[arg(short, long)]
    default: bool,

    /// PrivateKey or Mnemonic
    #[arg(long)]
    import_type: Option<String>,
}

impl From<ProfileArgs> for ProfileOptions {
    fn from(args: ProfileArgs) -> Self {
        Self {
            name: args.name,
            network: args.network,
            url: args.url,
            password: args.password,
            default: args.default,
            import_type: args.import_type,
        }
    }
}

#[derive(Subcommand)]
enum ProfileCommands {
    /// Create a profile with a new account
    Create {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Create a profile for an existing account
    Import {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Private key in hexadecimal
        #[arg(short = 'P', long)]
        private_key: Option<String>,

        /// BIP39 mnemonic
        #[arg(short, long)]
        mnemonic: Option<String>,

        /// Account index of the derivation path
        #[arg(long)]
        path_number: Option<String>,
    },

    /// List stored profiles
    List,

    /// Set the default profile
    Setdefault {
        /// Profile name
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Change the password of the selected profile
    Changepassword {
        /// Current password
        #[arg(short, long)]
        password: Option<String>,

        /// New password
        #[arg(long)]
        new_password: Option<String>,
    },
}

#[derive(Args)]
struct PageArgs {
    /// Entries per page
    #[arg(long)]
    page_size: Option<u32>,

    /// Page to show, starting at 1
    #[arg(long)]
    page_number: Option<u32>,
}

#[derive(Subcommand)]
enum AccountCommands {
    /// Show account balances and keys
    Info {
        /// Address, defaults to the profile address
        #[arg(short, long)]
        address: Option<String>,
    },

    /// List confirmed transactions
    Transactions {
        #[arg(short, long)]
        address: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// List aggregate bonded transactions waiting for cosignatures
    Aggregatebonded {
        #[arg(short, long)]
        address: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(Subcommand)]
enum MosaicCommands {
    /// Show mosaic information
    Info {
        /// Mosaic id in hexadecimal
        #[arg(short, long)]
        mosaic_id: Option<String>,
    },
}

#[derive(Subcommand)]
enum DiagnosticCommands {
    /// Show the node software versions
    Serverinfo {
        /// Node URL, defaults to the profile node
        #[arg(short, long)]
        url: Option<String>,
    },
}

#[derive(Subcommand)]
enum TransactionCommands {
    /// Send mosaics and a message
    Transfer(TransferArgs),

    /// Attach metadata to an account
    Accountmetadata(AccountMetadataArgs),

    /// Attach metadata to a mosaic
    Mosaicmetadata(MosaicMetadataArgs),

    /// Allow or block incoming mosaics
    Accountmosaicrestriction(MosaicRestrictionArgs),

    /// Lock funds behind a secret
    Secretlock(SecretLockArgs),

    /// Show the status of a transaction
    Status {
        /// Transaction hash
        #[arg(long)]
        hash: Option<String>,
    },

    /// Cosign an aggregate bonded transaction
    Cosign {
        /// Aggregate bonded transaction hash
        #[arg(long)]
        hash: Option<String>,

        /// Profile password
        #[arg(short, long)]
        password: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    if let Err(e) = run(cli) {
        println!("{}", formatter::error(&e.to_string()));
        std::process::exit(1);
    }
    Ok(())
}

fn run(cli: Cli) -> CliResult<()> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(profiles_file) = cli.profiles_file {
        settings.profiles_file = profiles_file;
    }
    log::debug!("Profiles file: {}", settings.profiles_file.display());

    let state = AppState::new(settings, cli.profile, !cli.no_prompt);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        match cli.command {
            Commands::Profile { action } => match action {
                ProfileCommands::Create { profile: options } => {
                    profile::cmd_profile_create(&state, &options.into()).await
                }
                ProfileCommands::Import {
                    profile: options,
                    private_key,
                    mnemonic,
                    path_number,
                } => {
                    let import = ImportOptions {
                        private_key,
                        mnemonic,
                        path_number,
                    };
                    profile::cmd_profile_import(&state, &options.into(), &import).await
                }
                ProfileCommands::List => profile::cmd_profile_list(&state),
                ProfileCommands::Setdefault { name } => {
                    profile::cmd_profile_set_default(&state, name.as_deref())
                }
                ProfileCommands::Changepassword {
                    password,
                    new_password,
                } => profile::cmd_profile_change_password(
                    &state,
                    password.as_deref(),
                    new_password.as_deref(),
                ),
            },

            Commands::Account { action } => match action {
                AccountCommands::Info { address } => {
                    account::cmd_account_info(&state, address.as_deref()).await
                }
                AccountCommands::Transactions { address, page } => {
                    account::cmd_account_transactions(&state, address.as_deref(), page.into())
                        .await
                }
                AccountCommands::Aggregatebonded { address, page } => {
                    account::cmd_account_aggregate_bonded(&state, address.as_deref(), page.into())
                        .await
                }
            },

            Commands::Mosaic { action } => match action {
                MosaicCommands::Info { mosaic_id } => {
                    mosaic::cmd_mosaic_info(&state, mosaic_id.as_deref()).await
                }
            },

            Commands::Diagnostic { action } => match action {
                DiagnosticCommands::Serverinfo { url } => {
                    diagnostic::cmd_diagnostic_server_info(&state, url.as_deref()).await
                }
            },

            Commands::Transaction { action } => match action {
                TransactionCommands::Transfer(args) => {
                    transaction::cmd_transaction_transfer(&state, &args).await
                }
                TransactionCommands::Accountmetadata(args) => {
                    transaction::cmd_transaction_account_metadata(&state, &args).await
                }
                TransactionCommands::Mosaicmetadata(args) => {
                    transaction::cmd_transaction_mosaic_metadata(&state, &args).await
                }
                TransactionCommands::Accountmosaicrestriction(args) => {
                    transaction::cmd_transaction_account_mosaic_restriction(&state, &args).await
                }
                TransactionCommands::Secretlock(args) => {
                    transaction::cmd_transaction_secret_lock(&state, &args).await
                }
                TransactionCommands::Status { hash } => {
                    transaction::cmd_transaction_status(&state, hash.as_deref()).await
                }
                TransactionCommands::Cosign { hash, password } => {
                    transaction::cmd_transaction_cosign(&state, hash.as_deref(), password.as_deref())
                        .await
                }
            },
        }
    })
}

impl From<PageArgs> for PageOptions {
    fn from(args: PageArgs) -> Self {
        Self {
            page_size: args.page_size,
            page_number: args.page_number,
        }
    }
}
