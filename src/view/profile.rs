use std::fmt;

use crate::profile::Profile;

use super::{property_table, yes_no};

/// A stored profile. Never shows secrets.
pub struct ProfileTable<'a> {
    profile: &'a Profile,
}

impl<'a> ProfileTable<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        Self { profile }
    }
}

impl fmt::Display for ProfileTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile = self.profile;
        let currency = profile.network_currency();
        let currency_name = currency
            .namespace
            .clone()
            .or_else(|| currency.mosaic_id.map(|id| id.to_hex()))
            .unwrap_or_else(|| "-".to_string());

        let mut rows = vec![
            ("Name".to_string(), profile.name.clone()),
            ("Address".to_string(), profile.address.pretty()),
            ("Public key".to_string(), profile.public_key.to_hex()),
            ("Network".to_string(), profile.network_type().to_string()),
            ("Url".to_string(), profile.url().to_string()),
            (
                "Generation hash".to_string(),
                profile.generation_hash().to_string(),
            ),
            (
                "Epoch adjustment".to_string(),
                profile.epoch_adjustment().to_string(),
            ),
            ("Network currency".to_string(), currency_name),
            ("Import type".to_string(), profile.import_type().to_string()),
        ];
        if let Some(path) = profile.derivation_path() {
            rows.push(("Derivation path".to_string(), path));
        }
        rows.push(("Default".to_string(), yes_no(profile.is_default)));

        let title = if profile.is_default {
            format!("Profile {} (default)", profile.name)
        } else {
            format!("Profile {}", profile.name)
        };
        write!(f, "{}", property_table(&title, &rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::Password;
    use crate::model::{Account, NetworkType};
    use crate::profile::profile::tests::network_settings;

    #[test]
    fn test_profile_table_hides_private_key() {
        let account = Account::generate(NetworkType::Testnet);
        let profile = Profile::from_private_key(
            "alice",
            network_settings(NetworkType::Testnet),
            &account.private_key_hex(),
            &Password::new("password123"),
            true,
        )
        .unwrap();

        let text = ProfileTable::new(&profile).to_string();
        assert!(text.contains("Profile alice (default)"));
        assert!(text.contains("symbol.xym"));
        assert!(!text.contains(&account.private_key_hex()));
    }
}
