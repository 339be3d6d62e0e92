use std::fmt;

use crate::model::MosaicInfo;

use super::{property_table, yes_no};

pub struct MosaicViewTable<'a> {
    info: &'a MosaicInfo,
}

impl<'a> MosaicViewTable<'a> {
    pub fn new(info: &'a MosaicInfo) -> Self {
        Self { info }
    }
}

impl fmt::Display for MosaicViewTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = self.info;
        let expiration = info
            .expiration_height()
            .map_or_else(|| "Never".to_string(), |h| h.to_string());
        let rows = vec![
            ("Id".to_string(), info.id.to_hex()),
            ("Divisibility".to_string(), info.divisibility.to_string()),
            ("Transferable".to_string(), yes_no(info.is_transferable())),
            ("Supply Mutable".to_string(), yes_no(info.is_supply_mutable())),
            ("Restrictable".to_string(), yes_no(info.is_restrictable())),
            ("Height".to_string(), info.start_height.to_string()),
            ("Expiration".to_string(), expiration),
            ("Owner".to_string(), info.owner_address.pretty()),
            ("Supply (Absolute)".to_string(), info.supply.to_string()),
            (
                "Supply (Relative)".to_string(),
                info.relative_supply()
                    .unwrap_or_else(|_| info.supply.to_string()),
            ),
        ];
        write!(f, "{}", property_table("Mosaic Information", &rows))
    }
}
