//! Concurrent query fan-out.
//!
//! One detached task per selected provider. Every task hands exactly one
//! [`Reply`] to a channel sized for all of them, so no producer ever waits on
//! the consumer.

use crate::framework::{Provider, QueryError, Reply, TrackingService};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, info_span, Instrument};

/// The receiving end of a fan-out, plus how many replies to expect.
#[derive(Debug)]
pub struct PendingReplies {
    pub receiver: mpsc::Receiver<Reply>,
    pub expected: usize,
}

/// Starts one query per provider and returns where their replies will land.
///
/// Tasks are spawned onto the runtime rather than polled by the caller, so
/// dropping the returned receiver (or the future that owns it) does not stop
/// queries already in flight. `watchdog`, when set, turns a query that runs
/// longer into [`QueryError::TimedOut`].
pub fn spawn_queries(
    service: Arc<dyn TrackingService>,
    providers: &[Arc<dyn Provider>],
    shipment_number: &str,
    watchdog: Option<Duration>,
) -> PendingReplies {
    let expected = providers.len();
    // mpsc::channel panics on zero capacity
    let (sender, receiver) = mpsc::channel(expected.max(1));

    for provider in providers {
        let service = service.clone();
        let provider = provider.clone();
        let sender = sender.clone();
        let number = shipment_number.to_string();
        let span = info_span!("query", provider = %provider.name());

        tokio::spawn(
            async move {
                let started = Instant::now();
                let result = run_query(service.as_ref(), provider.clone(), &number, watchdog).await;
                debug!(
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    ok = result.is_ok(),
                    "Query finished"
                );
                // capacity == expected, so this never waits
                if sender.send(Reply::new(provider, result)).await.is_err() {
                    debug!("Reply dropped, nobody is listening anymore");
                }
            }
            .instrument(span),
        );
    }

    PendingReplies { receiver, expected }
}

async fn run_query(
    service: &dyn TrackingService,
    provider: Arc<dyn Provider>,
    shipment_number: &str,
    watchdog: Option<Duration>,
) -> Result<crate::model::TrackingData, QueryError> {
    let query = service.invoke(provider, shipment_number);
    match watchdog {
        Some(limit) => tokio::time::timeout(limit, query)
            .await
            .unwrap_or_else(|_| Err(QueryError::TimedOut(limit))),
        None => query.await,
    }
}
