//! # `/track` Command
//!
//! Queries every provider that recognises a shipment number at once, keeps one
//! status message up to date while replies come in, and sends a detail message
//! for every provider that found the package.
//!
//! ## Structure
//!
//! - [`selector`] - [`ProviderRegistry`] and candidate selection
//! - [`fanout`] - one detached task per selected provider
//! - [`board`] - the single consumer folding replies into the status table
//! - [`render`] - status classification and the sorted status block
//! - [`detail`] - the per-provider timeline message
//! - [`error`] - [`TrackError`], the only errors a caller ever sees
//!
//! ## Flow
//!
//! ```text
//! select -> spawn_queries -> StatusBoard::run -> StatusClient (send once, edit after)
//!                                             -> DetailClient (one per success)
//! ```

pub mod board;
pub mod detail;
pub mod error;
pub mod fanout;
pub mod render;
pub mod selector;

pub use board::*;
pub use error::*;
pub use selector::*;

use crate::clients::{DetailClient, StatusClient};
use crate::framework::{ChatTransport, TrackingService};
use crate::lifecycle::TrackConfig;
use crate::model::CommandArguments;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument};

/// A chat command the dispatcher can route to.
#[async_trait]
pub trait Command: Send + Sync {
    /// Errors the dispatcher should format for the user.
    type Error: std::error::Error + Send + Sync;

    fn usage(&self) -> &'static str;

    fn help(&self) -> &'static str;

    async fn execute(&self, args: &CommandArguments) -> Result<(), Self::Error>;
}

/// Shows up-to-date tracking information for one shipment number.
#[derive(Clone)]
pub struct TrackCommand {
    registry: ProviderRegistry,
    service: Arc<dyn TrackingService>,
    transport: Arc<dyn ChatTransport>,
    config: TrackConfig,
}

impl TrackCommand {
    pub fn new(
        registry: ProviderRegistry,
        service: Arc<dyn TrackingService>,
        transport: Arc<dyn ChatTransport>,
        config: TrackConfig,
    ) -> Self {
        Self {
            registry,
            service,
            transport,
            config,
        }
    }

    /// Runs one invocation to completion and reports what the board saw.
    ///
    /// # Errors
    /// - [`TrackError::Usage`] when no shipment number was given.
    /// - [`TrackError::NoProviderMatches`] when nothing recognises it.
    ///
    /// Both are returned before any query starts or any message is sent.
    #[instrument(skip(self, args), fields(chat_id = %args.chat_id))]
    pub async fn track(&self, args: &CommandArguments) -> Result<BoardSummary, TrackError> {
        let shipment_number = args
            .first()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or(TrackError::Usage)?;
        let providers = self.registry.select(shipment_number)?;
        info!(
            shipment_number,
            providers = providers.len(),
            "Tracking shipment"
        );

        let replies = fanout::spawn_queries(
            self.service.clone(),
            &providers,
            shipment_number,
            self.config.query_timeout,
        );

        let board = StatusBoard::new(
            render::StatusTable::pending(&providers, &self.config.pending_status),
            StatusClient::new(self.transport.clone(), args.chat_id),
            DetailClient::new(
                self.transport.clone(),
                args.chat_id,
                args.message_id,
                self.config.follow_label.as_str(),
            ),
        );

        Ok(board.run(replies).await)
    }
}

#[async_trait]
impl Command for TrackCommand {
    type Error = TrackError;

    fn usage(&self) -> &'static str {
        "/track <shipmentNumber>"
    }

    fn help(&self) -> &'static str {
        "shows up-to-date tracking information about a package with the given number"
    }

    async fn execute(&self, args: &CommandArguments) -> Result<(), TrackError> {
        self.track(args).await.map(|_| ())
    }
}
