//! Account tables

use std::fmt;
use tabled::builder::Builder;
use tabled::settings::style::BorderSpanCorrection;
use tabled::settings::{Panel, Style};

use crate::model::{Account, AccountInfo};

use super::property_table;

pub struct AccountInfoTable<'a> {
    info: &'a AccountInfo,
}

impl<'a> AccountInfoTable<'a> {
    pub fn new(info: &'a AccountInfo) -> Self {
        Self { info }
    }
}

impl fmt::Display for AccountInfoTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = self.info;
        let rows = vec![
            ("Address".to_string(), info.address.pretty()),
            ("Address height".to_string(), info.address_height.to_string()),
            (
                "Public key".to_string(),
                info.public_key
                    .map_or_else(|| "-".to_string(), |pk| pk.to_hex()),
            ),
            (
                "Public key height".to_string(),
                info.public_key_height.to_string(),
            ),
            ("Importance".to_string(), info.importance.to_string()),
        ];
        writeln!(f, "{}", property_table("Account Information", &rows))?;

        if info.mosaics.is_empty() {
            return Ok(());
        }
        let mut builder = Builder::default();
        builder.set_header(vec!["Mosaic Id", "Amount (Absolute)"]);
        for mosaic in &info.mosaics {
            builder.push_record(vec![mosaic.id.to_hex(), mosaic.amount.to_string()]);
        }
        let mut table = builder.build();
        table.with(Panel::header("Balance Information"));
        table.with(Style::rounded());
        table.with(BorderSpanCorrection);
        write!(f, "{}", table)
    }
}

/// Credentials of a freshly created account. Shows secrets.
pub struct AccountCredentialsTable<'a> {
    account: &'a Account,
    mnemonic: Option<&'a str>,
    derivation_path: Option<String>,
}

impl<'a> AccountCredentialsTable<'a> {
    pub fn new(account: &'a Account) -> Self {
        Self {
            account,
            mnemonic: None,
            derivation_path: None,
        }
    }

    pub fn with_mnemonic(mut self, mnemonic: &'a str, derivation_path: Option<String>) -> Self {
        self.mnemonic = Some(mnemonic);
        self.derivation_path = derivation_path;
        self
    }
}

impl fmt::Display for AccountCredentialsTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rows = vec![
            ("Address".to_string(), self.account.address().pretty()),
            ("Network".to_string(), self.account.network_type().to_string()),
            ("Public key".to_string(), self.account.public_key().to_hex()),
            ("Private key".to_string(), self.account.private_key_hex()),
        ];
        if let Some(mnemonic) = self.mnemonic {
            rows.push(("Mnemonic".to_string(), mnemonic.to_string()));
        }
        if let Some(path) = &self.derivation_path {
            rows.push(("Derivation path".to_string(), path.clone()));
        }
        write!(f, "{}", property_table("Account Credentials", &rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Mosaic, MosaicId, NetworkType};

    #[test]
    fn test_account_info_lists_mosaics() {
        let account = Account::generate(NetworkType::Testnet);
        let info = AccountInfo {
            address: account.address(),
            address_height: 1,
            public_key: None,
            public_key_height: 0,
            importance: 0,
            mosaics: vec![Mosaic::new(MosaicId(0x091F837E059AE13C), 42)],
        };
        let text = AccountInfoTable::new(&info).to_string();
        assert!(text.contains("Balance Information"));
        assert!(text.contains("091F837E059AE13C"));
    }

    #[test]
    fn test_credentials_show_path_for_mnemonics() {
        let account = Account::generate(NetworkType::Testnet);
        let text = AccountCredentialsTable::new(&account)
            .with_mnemonic("word list", Some("m/44'/1'/0'/0'/0'".to_string()))
            .to_string();
        assert!(text.contains(&account.private_key_hex()));
        assert!(text.contains("m/44'/1'/0'/0'/0'"));
    }
}
