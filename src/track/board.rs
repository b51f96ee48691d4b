//! # Status Board
//!
//! The single consumer of a fan-out. It owns the status table and the status
//! message handle outright, folds replies in the order they arrive, and
//! re-renders after every one of them. Producers never see this state, so
//! nothing here needs a lock.

use crate::clients::{DetailClient, StatusClient};
use crate::framework::{QueryError, Reply};
use crate::track::fanout::PendingReplies;
use crate::track::render::{classify, StatusTable};
use tracing::{debug, info, warn};

/// Counts of what a finished board saw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardSummary {
    pub consumed: usize,
    pub found: usize,
    pub not_found: usize,
    pub failed: usize,
    /// The last rendered status block.
    pub final_text: String,
}

/// Aggregates the replies of one invocation into its status message.
pub struct StatusBoard {
    table: StatusTable,
    status: StatusClient,
    details: DetailClient,
}

impl StatusBoard {
    pub fn new(table: StatusTable, status: StatusClient, details: DetailClient) -> Self {
        Self {
            table,
            status,
            details,
        }
    }

    /// Renders the initial table, then consumes exactly `expected` replies.
    ///
    /// Stops early only if every producer is gone without replying, which
    /// happens when a query task panics.
    pub async fn run(mut self, replies: PendingReplies) -> BoardSummary {
        let PendingReplies {
            mut receiver,
            expected,
        } = replies;
        let mut summary = BoardSummary::default();

        self.render().await;

        while summary.consumed < expected {
            let Some(reply) = receiver.recv().await else {
                warn!(
                    consumed = summary.consumed,
                    expected, "Reply channel closed early"
                );
                break;
            };
            summary.consumed += 1;
            self.apply(reply, &mut summary).await;
        }

        summary.final_text = self.table.render();
        info!(
            consumed = summary.consumed,
            found = summary.found,
            not_found = summary.not_found,
            failed = summary.failed,
            "Board finished"
        );
        summary
    }

    async fn apply(&mut self, reply: Reply, summary: &mut BoardSummary) {
        let Reply { provider, result } = reply;
        let name = provider.name();
        let status = classify(&result);
        debug!(provider = name, %status, "Reply");
        self.table.set(name, status);

        match &result {
            Err(QueryError::NotFound) => summary.not_found += 1,
            Err(e) => {
                warn!(provider = name, error = %e, "Provider failed");
                summary.failed += 1;
            }
            Ok(_) => summary.found += 1,
        }

        self.render().await;

        if let Ok(data) = &result {
            self.details.report(data).await;
        }
    }

    async fn render(&mut self) {
        let text = self.table.render();
        self.status.show(text).await;
    }
}
