//! Console views
//!
//! Every view implements `Display` and renders one or more rounded tables.

pub mod account;
pub mod mosaic;
pub mod profile;
pub mod server;
pub mod transaction;

use tabled::builder::Builder;
use tabled::settings::style::BorderSpanCorrection;
use tabled::settings::{Panel, Style};
use tabled::Table;

pub use account::{AccountCredentialsTable, AccountInfoTable};
pub use mosaic::MosaicViewTable;
pub use profile::ProfileTable;
pub use server::ServerInfoView;
pub use transaction::{TransactionStatusView, TransactionView};

/// Two column property/value table under a title
pub(crate) fn property_table(title: &str, rows: &[(String, String)]) -> Table {
    let mut builder = Builder::default();
    builder.set_header(vec!["Property", "Value"]);
    for (key, value) in rows {
        builder.push_record(vec![key.as_str(), value.as_str()]);
    }
    let mut table = builder.build();
    table.with(Panel::header(title));
    table.with(Style::rounded());
    table.with(BorderSpanCorrection);
    table
}

pub(crate) fn yes_no(value: bool) -> String {
    if value { "true" } else { "false" }.to_string()
}
