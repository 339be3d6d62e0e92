//! Multisig account relationships

use super::address::Address;

/// Multisig configuration of one account as reported by the network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultisigAccountInfo {
    pub account_address: Address,
    /// Cosignatures required to approve a transaction
    pub min_approval: u32,
    /// Cosignatures required to remove a cosignatory
    pub min_removal: u32,
    /// Accounts allowed to cosign for this account
    pub cosignatory_addresses: Vec<Address>,
    /// Multisig accounts this account is a cosignatory of
    pub multisig_addresses: Vec<Address>,
}

impl MultisigAccountInfo {
    /// True when the account itself requires cosignatures
    pub fn is_multisig(&self) -> bool {
        self.min_approval != 0 && self.min_removal != 0
    }

    pub fn has_cosigner(&self, address: &Address) -> bool {
        self.cosignatory_addresses.contains(address)
    }

    /// Whether announcing for this account needs cosignatures beyond the
    /// initiator's own, i.e. must go through an aggregate bonded
    pub fn requires_bonded(&self) -> bool {
        self.min_approval > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::KeyPair;
    use crate::model::NetworkType;

    fn address() -> Address {
        Address::from_public_key(&KeyPair::generate().public_key(), NetworkType::Testnet)
    }

    #[test]
    fn test_is_multisig() {
        let cosigner = address();
        let mut info = MultisigAccountInfo {
            account_address: address(),
            min_approval: 0,
            min_removal: 0,
            cosignatory_addresses: vec![],
            multisig_addresses: vec![address()],
        };
        assert!(!info.is_multisig());

        info.min_approval = 2;
        info.min_removal = 1;
        info.cosignatory_addresses.push(cosigner);
        assert!(info.is_multisig());
        assert!(info.has_cosigner(&cosigner));
        assert!(info.requires_bonded());
    }
}
