//! Announcing signed transactions
//!
//! A hash lock must be confirmed before the aggregate bonded transaction it
//! funds is accepted by the partial cache, so lock and bonded pairs are
//! announced in two steps with status polling in between.

use std::sync::Arc;
use std::time::Duration;

use crate::model::{SignedTransaction, TransactionStatus};
use crate::repository::{RepositoryError, TransactionRepository};
use crate::resolver::OptionsResolver;
use crate::settings::Settings;

use super::formatter;
use super::spinner::Spinner;
use super::{ServiceError, ServiceResult};

pub const ANNOUNCE_PROMPT: &str = "Do you want to announce your transaction?";

#[derive(Debug, Clone, Copy, Default)]
pub struct AnnounceOptions {
    /// Announce without asking
    pub announce: bool,
    /// Wait for the last transaction to be confirmed
    pub sync: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnounceOutcome {
    /// The user chose not to announce; payloads were printed instead
    Declined,
    /// Hashes of the announced transactions, in announce order
    Announced(Vec<String>),
}

pub struct AnnounceService {
    repository: Arc<dyn TransactionRepository>,
    poll_interval: Duration,
    poll_timeout: Duration,
}

impl AnnounceService {
    pub fn new(repository: Arc<dyn TransactionRepository>, settings: &Settings) -> Self {
        Self::with_polling(
            repository,
            settings.status_poll_interval(),
            settings.status_poll_timeout(),
        )
    }

    pub fn with_polling(
        repository: Arc<dyn TransactionRepository>,
        poll_interval: Duration,
        poll_timeout: Duration,
    ) -> Self {
        Self {
            repository,
            poll_interval,
            poll_timeout,
        }
    }

    /// Ask for confirmation, then announce
    pub async fn run(
        &self,
        signed: &[SignedTransaction],
        options: AnnounceOptions,
        resolver: &OptionsResolver<'_>,
    ) -> ServiceResult<AnnounceOutcome> {
        if !Self::should_announce(options, resolver)? {
            for tx in signed {
                println!("{}", formatter::info(&format!("Hash: {}", tx.hash)));
                println!("{}", formatter::info(&format!("Payload: {}", tx.payload)));
            }
            return Ok(AnnounceOutcome::Declined);
        }
        let hashes = self.announce(signed, options.sync).await?;
        Ok(AnnounceOutcome::Announced(hashes))
    }

    fn should_announce(
        options: AnnounceOptions,
        resolver: &OptionsResolver<'_>,
    ) -> ServiceResult<bool> {
        if options.announce {
            return Ok(true);
        }
        if !resolver.allows_prompt() {
            return Ok(false);
        }
        Ok(resolver.prompter().confirm(ANNOUNCE_PROMPT, false)?)
    }

    /// Announce every transaction in order
    pub async fn announce(
        &self,
        signed: &[SignedTransaction],
        sync: bool,
    ) -> ServiceResult<Vec<String>> {
        let mut hashes = Vec::with_capacity(signed.len());
        let mut iter = signed.iter().peekable();

        while let Some(tx) = iter.next() {
            let bonded_follows = iter.peek().is_some_and(|next| next.is_aggregate_bonded());
            if tx.is_hash_lock() && bonded_follows {
                self.announce_one(tx).await?;
                hashes.push(tx.hash.clone());
                self.wait_for_confirmation(&tx.hash).await?;
                if let Some(bonded) = iter.next() {
                    self.announce_one(bonded).await?;
                    hashes.push(bonded.hash.clone());
                }
            } else {
                self.announce_one(tx).await?;
                hashes.push(tx.hash.clone());
            }
        }

        if sync {
            if let Some(last) = hashes.last() {
                let status = self.wait_for_confirmation(last).await?;
                println!(
                    "{}",
                    formatter::success(&format!(
                        "Transaction {} confirmed at height {}",
                        status.hash,
                        status.height.map_or_else(|| "-".to_string(), |h| h.to_string())
                    ))
                );
            }
        }
        Ok(hashes)
    }

    async fn announce_one(&self, tx: &SignedTransaction) -> ServiceResult<()> {
        let spinner = Spinner::new("Announcing transaction");
        spinner.start();
        let result = if tx.is_aggregate_bonded() {
            self.repository.announce_aggregate_bonded(tx).await
        } else {
            self.repository.announce(tx).await
        };
        spinner.stop();
        let message = result?;
        log::info!("Announced {} {}: {}", tx.transaction_type, tx.hash, message);
        println!(
            "{}",
            formatter::success(&format!(
                "{} transaction announced correctly. Hash: {}",
                tx.transaction_type, tx.hash
            ))
        );
        Ok(())
    }

    /// Poll the status of `hash` until it is confirmed, fails or the
    /// timeout elapses. Unknown hashes count as pending.
    pub async fn wait_for_confirmation(&self, hash: &str) -> ServiceResult<TransactionStatus> {
        let spinner = Spinner::new(&format!("Waiting for {} to be confirmed", hash));
        spinner.start();
        let result = tokio::time::timeout(self.poll_timeout, self.poll(hash)).await;
        spinner.stop();
        match result {
            Ok(status) => status,
            Err(_) => Err(ServiceError::StatusTimeout(hash.to_string())),
        }
    }

    async fn poll(&self, hash: &str) -> ServiceResult<TransactionStatus> {
        loop {
            match self.repository.status(hash).await {
                Ok(status) if status.is_failed() => {
                    return Err(ServiceError::TransactionFailed {
                        hash: hash.to_string(),
                        code: status.code,
                    });
                }
                Ok(status) if status.is_confirmed() => return Ok(status),
                Ok(status) => log::debug!("{} is {}", hash, status.group),
                Err(RepositoryError::NotFound(_)) => log::debug!("{} not known yet", hash),
                Err(RepositoryError::Http { status: 404, .. }) => {
                    log::debug!("{} not known yet", hash)
                }
                Err(err) => return Err(err.into()),
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}
