//! Account commands

use crate::model::{Address, Transaction};
use crate::repository::QueryParams;
use crate::service::{formatter, Spinner};
use crate::view::{AccountInfoTable, TransactionView};

use super::{AppState, CliResult};

/// Paging given on the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct PageOptions {
    pub page_size: Option<u32>,
    pub page_number: Option<u32>,
}

impl PageOptions {
    fn query(&self, state: &AppState) -> QueryParams {
        let mut query = QueryParams::with_page_size(self.page_size.unwrap_or(state.settings.page_size));
        if let Some(page_number) = self.page_number {
            query.page_number = page_number.max(1);
        }
        query
    }
}

fn resolve_address(state: &AppState, address: Option<&str>, fallback: Address) -> CliResult<Address> {
    Ok(state
        .resolver()
        .address("address", address, Some(fallback), "Enter an address:")?)
}

/// Show the account state of an address
pub async fn cmd_account_info(state: &AppState, address: Option<&str>) -> CliResult<()> {
    let profile = state.profile()?;
    let address = resolve_address(state, address, profile.address)?;
    let repositories = state.repositories(profile.url())?;

    let spinner = Spinner::new("Fetching account information");
    spinner.start();
    let info = repositories.account.account_info(&address).await;
    spinner.stop();

    println!("{}", AccountInfoTable::new(&info?));
    Ok(())
}

/// List confirmed transactions of an address
pub async fn cmd_account_transactions(
    state: &AppState,
    address: Option<&str>,
    page: PageOptions,
) -> CliResult<()> {
    let profile = state.profile()?;
    let address = resolve_address(state, address, profile.address)?;
    let repositories = state.repositories(profile.url())?;

    let spinner = Spinner::new("Fetching transactions");
    spinner.start();
    let transactions = repositories
        .account
        .transactions(&address, &page.query(state))
        .await;
    spinner.stop();

    print_transactions(
        &transactions?,
        profile.epoch_adjustment(),
        "There aren't transactions",
    );
    Ok(())
}

/// List aggregate bonded transactions waiting for cosignatures
pub async fn cmd_account_aggregate_bonded(
    state: &AppState,
    address: Option<&str>,
    page: PageOptions,
) -> CliResult<()> {
    let profile = state.profile()?;
    let address = resolve_address(state, address, profile.address)?;
    let repositories = state.repositories(profile.url())?;

    let spinner = Spinner::new("Fetching aggregate bonded transactions");
    spinner.start();
    let transactions = repositories
        .account
        .partial_transactions(&address, &page.query(state))
        .await;
    spinner.stop();

    print_transactions(
        &transactions?,
        profile.epoch_adjustment(),
        "There aren't aggregate bonded transaction",
    );
    Ok(())
}

fn print_transactions(transactions: &[Transaction], epoch_adjustment: u64, empty: &str) {
    println!("{}", render_transactions(transactions, epoch_adjustment, empty));
}

fn render_transactions(transactions: &[Transaction], epoch_adjustment: u64, empty: &str) -> String {
    if transactions.is_empty() {
        return formatter::error(empty);
    }
    transactions
        .iter()
        .map(|transaction| {
            TransactionView::new(transaction)
                .with_epoch_adjustment(epoch_adjustment)
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::testing::{state, store_profile};
    use crate::model::{Account, AccountInfo, NetworkType};
    use crate::service::testing::FakeNetwork;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_info_defaults_to_profile_address() {
        let dir = TempDir::new().unwrap();
        let fake = FakeNetwork::default();
        let state = state(&dir, &fake, &[]);
        let account = Account::generate(NetworkType::Testnet);
        store_profile(&state, "alice", &account);

        assert!(cmd_account_info(&state, None).await.is_err());

        fake.state().accounts.insert(
            account.address(),
            AccountInfo {
                address: account.address(),
                address_height: 1,
                public_key: Some(account.public_key()),
                public_key_height: 2,
                importance: 0,
                mosaics: vec![],
            },
        );
        cmd_account_info(&state, None).await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_listings() {
        let dir = TempDir::new().unwrap();
        let fake = FakeNetwork::default();
        let state = state(&dir, &fake, &[]);
        let account = Account::generate(NetworkType::Testnet);
        store_profile(&state, "alice", &account);
        let other = Account::generate(NetworkType::Testnet).address().plain();

        cmd_account_transactions(&state, Some(&other), PageOptions::default())
            .await
            .unwrap();
        cmd_account_aggregate_bonded(&state, None, PageOptions::default())
            .await
            .unwrap();
        assert_eq!(fake.state().partial_calls, vec![account.address()]);
    }

    #[test]
    fn test_empty_listing_is_reported_as_error() {
        assert_eq!(
            render_transactions(&[], 0, "There aren't transactions"),
            formatter::error("There aren't transactions")
        );
    }

    #[test]
    fn test_page_options() {
        let dir = TempDir::new().unwrap();
        let state = state(&dir, &FakeNetwork::default(), &[]);
        let query = PageOptions {
            page_size: Some(10),
            page_number: Some(0),
        }
        .query(&state);
        assert_eq!(query.page_size, 10);
        assert_eq!(query.page_number, 1);
    }
}
