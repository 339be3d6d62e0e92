//! Mosaic commands

use crate::service::Spinner;
use crate::view::MosaicViewTable;

use super::{AppState, CliResult};

/// Show the definition and supply of a mosaic
pub async fn cmd_mosaic_info(state: &AppState, mosaic_id: Option<&str>) -> CliResult<()> {
    let profile = state.profile()?;
    let mosaic_id = state.resolver().mosaic_id(mosaic_id)?;
    let repositories = state.repositories(profile.url())?;

    let spinner = Spinner::new("Fetching mosaic information");
    spinner.start();
    let info = repositories.mosaic.mosaic_info(mosaic_id).await;
    spinner.stop();

    match info? {
        Some(info) => {
            println!("{}", MosaicViewTable::new(&info));
            Ok(())
        }
        None => Err(format!("No mosaic exists with this id {}", mosaic_id.to_hex()).into()),
    }
}
