//! Profile commands

use crate::model::{Account, NetworkCurrency, NetworkType};
use crate::profile::{generate_mnemonic, ImportType, NetworkSettings, Profile, ProfileError};
use crate::repository::Repositories;
use crate::resolver::Ask;
use crate::service::{formatter, Spinner};
use crate::view::{AccountCredentialsTable, ProfileTable};

use super::{AppState, CliResult};

/// Namespace of the network currency on public networks
const CURRENCY_NAMESPACE: &str = "symbol.xym";
const DEFAULT_CURRENCY_DIVISIBILITY: u8 = 6;

/// Options shared by `profile create` and `profile import`
#[derive(Debug, Clone, Default)]
pub struct ProfileOptions {
    pub name: Option<String>,
    pub network: Option<String>,
    pub url: Option<String>,
    pub password: Option<String>,
    pub default: bool,
    pub import_type: Option<String>,
}

/// Secrets given to `profile import`
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    pub private_key: Option<String>,
    pub mnemonic: Option<String>,
    pub path_number: Option<String>,
}

/// Create a profile with a new random account
pub async fn cmd_profile_create(state: &AppState, options: &ProfileOptions) -> CliResult<()> {
    store_profile(state, options, None).await
}

/// Create a profile for an existing account
pub async fn cmd_profile_import(
    state: &AppState,
    options: &ProfileOptions,
    import: &ImportOptions,
) -> CliResult<()> {
    store_profile(state, options, Some(import)).await
}

async fn store_profile(
    state: &AppState,
    options: &ProfileOptions,
    import: Option<&ImportOptions>,
) -> CliResult<()> {
    let resolver = state.resolver();
    let network_type = resolver.network(options.network.as_deref())?;
    let url = resolver.url(options.url.as_deref())?;
    let name = resolver.profile_name(options.name.as_deref())?;
    if state.store.find(&name).is_ok() {
        return Err(ProfileError::AlreadyExists(name).into());
    }
    let password = resolver.new_password(options.password.as_deref())?;
    let is_default = resolver.default_flag(options.default)?;

    let repositories = state.repositories(&url)?;
    let network = fetch_network_settings(&repositories, network_type, &url).await?;
    let import_type = resolver.import_type(options.import_type.as_deref())?;

    let (profile, account, mnemonic) = match (import_type, import) {
        (ImportType::PrivateKey, None) => {
            let account = Account::generate(network_type);
            let profile = Profile::from_private_key(
                &name,
                network,
                &account.private_key_hex(),
                &password,
                is_default,
            )?;
            (profile, account, None)
        }
        (ImportType::PrivateKey, Some(import)) => {
            let private_key = resolver.private_key(import.private_key.as_deref())?;
            let profile =
                Profile::from_private_key(&name, network, &private_key, &password, is_default)?;
            let account = profile.decrypt(&password)?;
            (profile, account, None)
        }
        (ImportType::Mnemonic, import) => {
            let (mnemonic, path_number) = match import {
                Some(import) => (
                    resolver.mnemonic(import.mnemonic.as_deref())?,
                    resolver.path_number(import.path_number.as_deref())?,
                ),
                None => (generate_mnemonic()?, 0),
            };
            let profile = Profile::from_mnemonic(
                &name,
                network,
                &mnemonic,
                path_number,
                &password,
                is_default,
            )?;
            let account = profile.decrypt(&password)?;
            (profile, account, Some(mnemonic.to_string()))
        }
    };

    let derivation_path = profile.derivation_path();
    state.store.save(profile)?;
    log::info!("Stored profile {} for {}", name, account.address());

    // Only freshly generated secrets are shown
    let credentials = match (&mnemonic, import) {
        (Some(phrase), None) => {
            AccountCredentialsTable::new(&account).with_mnemonic(phrase, derivation_path)
        }
        _ => AccountCredentialsTable::new(&account),
    };
    if import.is_none() {
        println!("{}", credentials);
    } else {
        println!("{}", formatter::info(&format!("Address: {}", account.address().pretty())));
    }
    println!("{}", formatter::success(&format!("Stored {} profile", name)));
    Ok(())
}

/// Read the generation hash, epoch and currency from the node
async fn fetch_network_settings(
    repositories: &Repositories,
    network_type: NetworkType,
    url: &str,
) -> CliResult<NetworkSettings> {
    let spinner = Spinner::new(&format!("Fetching network information from {}", url));
    spinner.start();
    let node_info = repositories.node.node_info().await;
    let properties = repositories.node.network_properties().await;
    spinner.stop();
    let (node_info, properties) = (node_info?, properties?);

    if let Some(node_network) = node_info.network_type {
        if node_network != network_type {
            return Err(format!(
                "The node {} runs on {}, not {}",
                url, node_network, network_type
            )
            .into());
        }
    }

    let divisibility = match properties.currency_mosaic_id {
        Some(id) => repositories
            .mosaic
            .mosaic_info(id)
            .await?
            .map_or(DEFAULT_CURRENCY_DIVISIBILITY, |info| info.divisibility),
        None => DEFAULT_CURRENCY_DIVISIBILITY,
    };

    Ok(NetworkSettings {
        network_type,
        url: url.to_string(),
        generation_hash: node_info.network_generation_hash_seed,
        epoch_adjustment: properties.epoch_adjustment,
        network_currency: NetworkCurrency {
            mosaic_id: properties.currency_mosaic_id,
            namespace: Some(CURRENCY_NAMESPACE.to_string()),
            divisibility,
        },
    })
}

/// List all profiles
pub fn cmd_profile_list(state: &AppState) -> CliResult<()> {
    let profiles = state.store.all()?;
    if profiles.is_empty() {
        println!("{}", formatter::warning("There aren't profiles stored"));
        return Ok(());
    }
    for profile in &profiles {
        println!("{}", ProfileTable::new(profile));
    }
    Ok(())
}

/// Mark a profile as the default one
pub fn cmd_profile_set_default(state: &AppState, name: Option<&str>) -> CliResult<()> {
    let names: Vec<String> = state.store.all()?.into_iter().map(|p| p.name).collect();
    if names.is_empty() {
        return Err(ProfileError::NoDefault.into());
    }
    let name = state.resolver().resolve_option(
        "profile",
        name,
        None,
        Ask::Select {
            message: "Select the default profile:",
            items: names,
            default: 0,
        },
        |v| Ok(v.trim().to_string()),
    )?;
    state.store.set_default(&name)?;
    println!("{}", formatter::success(&format!("{} set as default profile", name)));
    Ok(())
}

/// Re-encrypt the selected profile with a new password
pub fn cmd_profile_change_password(
    state: &AppState,
    password: Option<&str>,
    new_password: Option<&str>,
) -> CliResult<()> {
    let mut profile = state.profile()?;
    let resolver = state.resolver();
    let old = resolver.password(password)?;
    let new = resolver.new_password(new_password)?;
    profile.change_password(&old, &new)?;
    state.store.update(profile.clone())?;
    println!(
        "{}",
        formatter::success(&format!("Password changed for profile {}", profile.name))
    );
    Ok(())
}
