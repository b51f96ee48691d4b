//! Error types for the `/track` command.

use thiserror::Error;

/// Errors that abort a `/track` invocation before anything is launched.
///
/// Per-provider failures and message delivery failures never surface here:
/// the former end up in the status text, the latter in the log.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TrackError {
    /// No shipment number was given. The text is already escaped for HTML.
    #[error("usage: /track &lt;shipmentNumber&gt;")]
    Usage,

    /// No provider recognises the number format.
    #[error("no tracking providers support this tracking number")]
    NoProviderMatches,
}
