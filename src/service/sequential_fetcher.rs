//! Sequential per-address fetching with early cancellation
//!
//! Pages are requested for one address at a time, in input order. Once
//! [`SequentialFetcher::kill`] is called no further request starts and an
//! in-flight request is dropped.

use futures::stream::{self, Stream, StreamExt};
use futures::future::BoxFuture;
use std::future::Future;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::model::Address;
use crate::repository::RepositoryResult;

type NetworkCall<T> =
    Arc<dyn Fn(Address) -> BoxFuture<'static, RepositoryResult<Vec<T>>> + Send + Sync>;

pub struct SequentialFetcher<T> {
    call: NetworkCall<T>,
    cancel: CancellationToken,
}

impl<T: Send + 'static> SequentialFetcher<T> {
    /// `call` fetches one page for one address
    pub fn new<F, Fut>(call: F) -> Self
    where
        F: Fn(Address) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = RepositoryResult<Vec<T>>> + Send + 'static,
    {
        Self {
            call: Arc::new(move |address| Box::pin(call(address))),
            cancel: CancellationToken::new(),
        }
    }

    /// Stop fetching
    pub fn kill(&self) {
        if !self.cancel.is_cancelled() {
            log::debug!("Sequential fetcher killed");
        }
        self.cancel.cancel();
    }

    pub fn is_killed(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// A token that kills this fetcher from elsewhere
    pub fn kill_handle(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// One item per address. An error is yielded once and ends the stream.
    pub fn results(
        &self,
        addresses: Vec<Address>,
    ) -> impl Stream<Item = RepositoryResult<Vec<T>>> + Send + 'static {
        let state = (
            addresses.into_iter(),
            self.call.clone(),
            self.cancel.clone(),
            false,
        );
        stream::unfold(state, |(mut addresses, call, cancel, failed)| async move {
            if failed || cancel.is_cancelled() {
                return None;
            }
            let address = addresses.next()?;
            log::debug!("Fetching page for {}", address);
            let result = tokio::select! {
                biased;
                _ = cancel.cancelled() => return None,
                result = call(address) => result,
            };
            let failed = result.is_err();
            Some((result, (addresses, call, cancel, failed)))
        })
    }

    /// Walk the addresses until an item matches, then kill the fetcher
    pub async fn find_first(
        &self,
        addresses: Vec<Address>,
        predicate: impl Fn(&T) -> bool,
    ) -> RepositoryResult<Option<T>> {
        let mut pages = Box::pin(self.results(addresses));
        while let Some(page) = pages.next().await {
            if let Some(found) = page?.into_iter().find(|item| predicate(item)) {
                self.kill();
                return Ok(Some(found));
            }
        }
        Ok(None)
    }
}
