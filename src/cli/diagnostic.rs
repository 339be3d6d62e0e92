//! Diagnostic commands

use crate::service::Spinner;
use crate::view::ServerInfoView;

use super::{AppState, CliResult};

/// Print the software versions of the node. Uses `url` when given,
/// otherwise the node of the selected profile.
pub async fn cmd_diagnostic_server_info(state: &AppState, url: Option<&str>) -> CliResult<()> {
    let url = match url {
        Some(url) => state.resolver().url(Some(url))?,
        None => state.profile()?.url().to_string(),
    };
    let repositories = state.repositories(&url)?;

    let spinner = Spinner::new(&format!("Fetching server information from {}", url));
    spinner.start();
    let info = repositories.node.server_info().await;
    spinner.stop();

    println!("{}", ServerInfoView::new(&info?));
    Ok(())
}
