//! Ports the tracking pipeline is written against.
//!
//! # Main Components
//!
//! - [`Provider`] - A tracking backend and its number-format predicate
//! - [`TrackingService`] - Queries one provider for one number
//! - [`ChatTransport`] - Send/edit contract of the chat API
//! - [`Reply`], [`QueryError`], [`TransportError`] - Values flowing through the pipeline
//!
//! # Testing
//!
//! See [`mock`] module for in-memory doubles of every port.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
