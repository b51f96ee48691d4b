//! # paczko-track
//!
//! > **Live multi-provider shipment tracking for a chat bot.**
//!
//! Given a shipment number, this crate asks every tracking provider that
//! recognises its format at the same time, keeps a single status message up to
//! date while the answers come in, and sends a detailed timeline for every
//! provider that found the package.
//!
//! ## 🏗️ Design
//!
//! ### Fan-out + single consumer
//! Every selected provider is queried in its own Tokio task. Replies land in a
//! channel sized for all of them, so a fast provider never waits on a slow
//! status edit. One consumer, the [`StatusBoard`](track::StatusBoard), owns the
//! status table and the status message handle. It processes replies
//! *sequentially* in arrival order, so no locks are needed for its state.
//!
//! ### Failures stay local
//! A provider that fails or does not know the package only changes its own
//! status line. A message that fails to send or edit is logged and skipped.
//! Only a missing shipment number and a number no provider recognises are
//! reported back to the caller, see [`TrackError`](track::TrackError).
//!
//! ### Ports, not globals
//! Providers, the tracking service and the chat API are traits
//! ([`framework`]) injected at startup ([`lifecycle`]), which is how the tests
//! run the whole pipeline against the doubles in [`framework::mock`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Ports ([`framework`])
//! - **Key items**: [`Provider`](framework::Provider), [`TrackingService`](framework::TrackingService),
//!   [`ChatTransport`](framework::ChatTransport), [`Reply`](framework::Reply).
//!
//! ### 2. The Pipeline ([`track`])
//! - **Key items**: [`TrackCommand`](track::TrackCommand), [`ProviderRegistry`](track::ProviderRegistry),
//!   [`StatusBoard`](track::StatusBoard).
//!
//! ### 3. The Interface ([`clients`])
//! - **Role**: Wraps the transport in the two message kinds the pipeline sends.
//! - **Key items**: [`StatusClient`](clients::StatusClient), [`DetailClient`](clients::DetailClient).
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! - **Key items**: [`TrackSystem`](lifecycle::TrackSystem), [`TrackConfig`](lifecycle::TrackConfig),
//!   [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run -- 620123456789012345678901
//!
//! # Run the tests
//! cargo test
//! ```

pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod track;
