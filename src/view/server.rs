use std::fmt;

use crate::model::ServerInfo;

pub struct ServerInfoView<'a> {
    info: &'a ServerInfo,
}

impl<'a> ServerInfoView<'a> {
    pub fn new(info: &'a ServerInfo) -> Self {
        Self { info }
    }
}

impl fmt::Display for ServerInfoView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "restVersion: {}", self.info.rest_version)?;
        write!(f, "sdkVersion: {}", self.info.sdk_version)
    }
}
