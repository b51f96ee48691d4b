//! # Core Ports
//!
//! This module defines the boundary between the tracking pipeline and the
//! world around it.
//!
//! ## Key Types
//!
//! - [`Provider`]: A tracking backend that recognises some shipment-number formats.
//! - [`TrackingService`]: Runs one query against one provider.
//! - [`ChatTransport`]: Sends and edits chat messages.
//! - [`Reply`]: The outcome of querying one provider.
//! - [`QueryError`] / [`TransportError`]: Failures on either side of the pipeline.

use crate::model::{EditMessage, MessageId, OutgoingMessage, TrackingData};
use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

// =============================================================================
// 1. THE ABSTRACTION (Provider, Service and Transport traits)
// =============================================================================

/// A tracking backend.
///
/// # Architecture Note
/// Providers are created once at startup and shared read-only between every
/// invocation, so they are handled as `Arc<dyn Provider>`. Recognising a number
/// must be cheap and must not touch the network: the selector calls it before
/// anything is launched.
pub trait Provider: Send + Sync + Debug {
    /// Display name, unique within a registry.
    fn name(&self) -> &str;

    /// Whether this provider understands the given shipment-number format.
    fn matches_number(&self, shipment_number: &str) -> bool;
}

/// Runs a single query against a single provider.
///
/// Implementations usually notify the followers of the `(provider, number)`
/// pair as a side effect. The pipeline does not depend on that.
#[async_trait]
pub trait TrackingService: Send + Sync {
    async fn invoke(
        &self,
        provider: Arc<dyn Provider>,
        shipment_number: &str,
    ) -> Result<TrackingData, QueryError>;
}

/// The subset of the chat API the pipeline needs.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Sends a new message and returns its id.
    async fn send_message(&self, message: OutgoingMessage) -> Result<MessageId, TransportError>;

    /// Replaces the text of a message sent earlier.
    async fn edit_message(&self, edit: EditMessage) -> Result<(), TransportError>;
}

// =============================================================================
// 2. REPLIES & ERRORS
// =============================================================================

/// Errors a provider query can end with.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The provider has no record of the shipment.
    #[error("not found")]
    NotFound,
    /// The watchdog gave up waiting for the provider.
    #[error("query timed out after {}s", .0.as_secs())]
    TimedOut(Duration),
    /// Anything else the provider reported.
    #[error("{0}")]
    Provider(Box<dyn std::error::Error + Send + Sync>),
}

impl QueryError {
    /// Wraps an arbitrary provider failure.
    pub fn provider(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Provider(error.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Errors reported by a [`ChatTransport`].
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum TransportError {
    #[error("failed to send message: {0}")]
    Send(String),
    #[error("failed to edit message: {0}")]
    Edit(String),
}

/// The outcome of querying one provider.
///
/// Carries the provider identity and exactly one of a result or an error.
#[derive(Debug)]
pub struct Reply {
    pub provider: Arc<dyn Provider>,
    pub result: Result<TrackingData, QueryError>,
}

impl Reply {
    pub fn new(provider: Arc<dyn Provider>, result: Result<TrackingData, QueryError>) -> Self {
        Self { provider, result }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }
}
