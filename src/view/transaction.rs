//! Transaction views

use std::fmt;

use crate::crypto::PublicKey;
use crate::model::transaction::{
    AccountMosaicRestrictionBody, AggregateBody, HashLockBody, MetadataBody, SecretLockBody,
    TransferBody,
};
use crate::model::{
    format_deadline, Address, Mosaic, NetworkType, Transaction, TransactionBody,
    TransactionStatus,
};

use super::property_table;

type Rows = Vec<(String, String)>;

/// A transaction with its header and type specific cells
pub struct TransactionView<'a> {
    transaction: &'a Transaction,
    epoch_adjustment: Option<u64>,
}

impl<'a> TransactionView<'a> {
    pub fn new(transaction: &'a Transaction) -> Self {
        Self {
            transaction,
            epoch_adjustment: None,
        }
    }

    /// Render deadlines as dates on a network with this epoch
    pub fn with_epoch_adjustment(mut self, epoch_adjustment: u64) -> Self {
        self.epoch_adjustment = Some(epoch_adjustment);
        self
    }

    fn status(&self) -> &'static str {
        let tx = self.transaction;
        if tx.height().is_some_and(|h| h > 0) {
            "Confirmed"
        } else if tx.is_partial() && tx.hash().is_some() {
            "Partial"
        } else if tx.hash().is_some() {
            "Unconfirmed"
        } else {
            "Unsigned"
        }
    }

    fn header_rows(&self) -> Rows {
        let tx = self.transaction;
        vec![
            ("Type".to_string(), tx.transaction_type().to_string()),
            ("Status".to_string(), self.status().to_string()),
            ("Hash".to_string(), tx.hash().unwrap_or("-").to_string()),
            (
                "Signer".to_string(),
                tx.signer
                    .as_ref()
                    .map(|pk| signer_address(pk, tx.network_type))
                    .unwrap_or_else(|| "-".to_string()),
            ),
            (
                "Deadline".to_string(),
                format_deadline(tx.deadline, self.epoch_adjustment),
            ),
            ("Max fee".to_string(), tx.max_fee.to_string()),
            (
                "Height".to_string(),
                tx.height().map_or_else(|| "-".to_string(), |h| h.to_string()),
            ),
        ]
    }
}

impl fmt::Display for TransactionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rows = self.header_rows();
        rows.extend(body_rows(&self.transaction.body, self.transaction.network_type));
        write!(f, "{}", property_table("Transaction Information", &rows))
    }
}

fn signer_address(public_key: &PublicKey, network_type: NetworkType) -> String {
    Address::from_public_key(public_key, network_type).pretty()
}

fn mosaic_cell(mosaic: &Mosaic) -> String {
    format!("{} ({})", mosaic.id.to_hex(), mosaic.amount)
}

fn body_rows(body: &TransactionBody, network_type: NetworkType) -> Rows {
    match body {
        TransactionBody::Transfer(body) => transfer_rows(body),
        TransactionBody::HashLock(body) => hash_lock_rows(body),
        TransactionBody::SecretLock(body) => secret_lock_rows(body),
        TransactionBody::AccountMetadata(body) => metadata_rows(body),
        TransactionBody::MosaicMetadata(body) => metadata_rows(body),
        TransactionBody::AccountMosaicRestriction(body) => restriction_rows(body),
        TransactionBody::AggregateComplete(body) | TransactionBody::AggregateBonded(body) => {
            aggregate_rows(body, network_type)
        }
        TransactionBody::Unknown { .. } => Vec::new(),
    }
}

fn transfer_rows(body: &TransferBody) -> Rows {
    let mut rows = vec![("Recipient".to_string(), body.recipient.pretty())];
    for (i, mosaic) in body.mosaics.iter().enumerate() {
        rows.push((format!("Mosaic ({})", i + 1), mosaic_cell(mosaic)));
    }
    rows.push((
        "Message".to_string(),
        body.message.clone().unwrap_or_default(),
    ));
    rows
}

fn hash_lock_rows(body: &HashLockBody) -> Rows {
    vec![
        ("Mosaic".to_string(), mosaic_cell(&body.mosaic)),
        ("Duration".to_string(), body.duration.to_string()),
        ("Hash".to_string(), body.hash.clone()),
    ]
}

fn secret_lock_rows(body: &SecretLockBody) -> Rows {
    vec![
        ("Recipient".to_string(), body.recipient.pretty()),
        ("Mosaic".to_string(), mosaic_cell(&body.mosaic)),
        ("Duration".to_string(), body.duration.to_string()),
        ("Hash type".to_string(), body.hash_type.to_string()),
        ("Secret".to_string(), body.secret.clone()),
    ]
}

fn metadata_rows(body: &MetadataBody) -> Rows {
    let mut rows = vec![
        ("Target address".to_string(), body.target_address.pretty()),
        (
            "Scoped metadata key".to_string(),
            body.scoped_metadata_key_hex(),
        ),
    ];
    if let Some(id) = &body.target_id {
        rows.push(("Target mosaic id".to_string(), id.to_hex()));
    }
    rows.push((
        "Value size delta".to_string(),
        body.value_size_delta.to_string(),
    ));
    rows.push(("Value".to_string(), body.value_lossy()));
    rows
}

fn restriction_rows(body: &AccountMosaicRestrictionBody) -> Rows {
    let list = |ids: &[crate::model::UnresolvedMosaicId]| {
        ids.iter().map(|id| id.to_hex()).collect::<Vec<_>>().join(", ")
    };
    vec![
        ("Restriction flags".to_string(), body.flags.describe()),
        ("Additions".to_string(), list(&body.additions)),
        ("Deletions".to_string(), list(&body.deletions)),
    ]
}

fn aggregate_rows(body: &AggregateBody, network_type: NetworkType) -> Rows {
    let mut rows = Vec::new();
    for (i, inner) in body.inner.iter().enumerate() {
        rows.push((
            format!("Inner transaction ({})", i + 1),
            inner.body.transaction_type().to_string(),
        ));
        rows.push((
            "Signer".to_string(),
            signer_address(&inner.signer, network_type),
        ));
        rows.extend(body_rows(&inner.body, network_type));
    }
    for (i, cosignature) in body.cosignatures.iter().enumerate() {
        rows.push((
            format!("Cosigner ({})", i + 1),
            signer_address(&cosignature.signer, network_type),
        ));
    }
    rows
}

/// Status of an announced transaction
pub struct TransactionStatusView<'a> {
    status: &'a TransactionStatus,
}

impl<'a> TransactionStatusView<'a> {
    pub fn new(status: &'a TransactionStatus) -> Self {
        Self { status }
    }
}

impl fmt::Display for TransactionStatusView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = self.status;
        let optional = |value: Option<u64>| value.map_or_else(|| "-".to_string(), |v| v.to_string());
        let rows = vec![
            ("Group".to_string(), status.group.to_string()),
            ("Status".to_string(), status.code.clone()),
            ("Hash".to_string(), status.hash.clone()),
            ("Deadline".to_string(), optional(status.deadline)),
            ("Height".to_string(), optional(status.height)),
        ];
        write!(f, "{}", property_table("Transaction Status", &rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::transaction::{Cosignature, InnerTransaction};
    use crate::model::{Account, Deadline, MosaicId, TransactionInfo};

    fn transfer_body() -> TransactionBody {
        TransactionBody::Transfer(TransferBody {
            recipient: Account::generate(NetworkType::Testnet).address(),
            mosaics: vec![
                Mosaic::new(MosaicId(0x6BED913FA20223F8), 1_000_000),
                Mosaic::new(MosaicId(0x3E8), 1),
            ],
            message: Some("rent".to_string()),
        })
    }

    #[test]
    fn test_transfer_view() {
        let tx = Transaction::new(NetworkType::Testnet, Deadline(1), 100, transfer_body());
        let text = TransactionView::new(&tx).to_string();
        assert!(text.contains("Transfer"));
        assert!(text.contains("Mosaic (2)"));
        assert!(text.contains("6BED913FA20223F8 (1000000)"));
        assert!(text.contains("rent"));
        assert!(text.contains("Unsigned"));
    }

    #[test]
    fn test_partial_aggregate_view_lists_cosigners() {
        let signer = Account::generate(NetworkType::Testnet);
        let cosigner = Account::generate(NetworkType::Testnet);
        let mut tx = Transaction::aggregate(
            NetworkType::Testnet,
            Deadline(1),
            0,
            vec![InnerTransaction {
                signer: signer.public_key(),
                body: transfer_body(),
            }],
            true,
        );
        tx.body.aggregate_mut().unwrap().cosignatures.push(Cosignature {
            signer: cosigner.public_key(),
            signature: "00".repeat(64),
            version: 0,
        });
        tx.info = Some(TransactionInfo {
            hash: Some("AA".repeat(32)),
            ..Default::default()
        });

        let text = TransactionView::new(&tx).to_string();
        assert!(text.contains("Partial"));
        assert!(text.contains("Inner transaction (1)"));
        assert!(text.contains(&cosigner.address().pretty()));
    }

    #[test]
    fn test_metadata_key_is_padded_hex() {
        let body = TransactionBody::AccountMetadata(MetadataBody {
            target_address: Account::generate(NetworkType::Testnet).address(),
            scoped_metadata_key: 0xABC,
            target_id: None,
            value_size_delta: 3,
            value: b"abc".to_vec(),
        });
        let tx = Transaction::new(NetworkType::Testnet, Deadline(1), 0, body);
        let text = TransactionView::new(&tx).to_string();
        assert!(text.contains("0000000000000ABC"));
        assert!(!text.contains("Target mosaic id"));
    }
}
