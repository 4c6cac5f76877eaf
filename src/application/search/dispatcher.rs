use super::session::{PendingSearch, SearchCompletion};
use crate::application::{error::ApplicationError, ports::SearchClientPort};
use std::{sync::Arc, time::Duration};
use tokio::time::{Instant, timeout};

/// Runs the remote half of a search cycle under a deadline.
#[derive(Clone)]
pub struct SearchDispatcher {
    client: Arc<SearchClientPort>,
    timeout: Duration,
}

impl SearchDispatcher {
    pub fn new(client: Arc<SearchClientPort>, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Never fails: transport errors and the deadline end up inside the
    /// completion so the session can decide whether they still matter.
    pub async fn execute(&self, pending: PendingSearch) -> SearchCompletion {
        let generation = pending.generation();
        let started = Instant::now();

        let result = match timeout(self.timeout, self.client.search(pending.request())).await {
            Ok(result) => result,
            Err(_) => Err(ApplicationError::Timeout(self.timeout)),
        };

        tracing::debug!(
            generation,
            elapsed_ms = started.elapsed().as_millis() as u64,
            ok = result.is_ok(),
            "search dispatched"
        );
        SearchCompletion::new(&pending, result)
    }
}
