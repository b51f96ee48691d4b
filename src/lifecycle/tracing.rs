//! # Observability & Tracing
//!
//! Structured logging for the whole pipeline, built on `tracing`.
//!
//! ## What Gets Traced
//!
//! - **Invocation**: a `track` span per command, carrying the chat id
//! - **Selection**: how many providers were known and selected
//! - **Queries**: a `query` span per provider with elapsed time and outcome
//! - **Board**: every reply as it is folded in, and a summary at the end
//! - **Delivery failures**: logged at `warn` and otherwise ignored
//!
//! ## Usage Examples
//!
//! ```bash
//! # Lifecycle and summaries
//! RUST_LOG=info cargo run -- 6202020202020202020202
//!
//! # Every reply and every status edit
//! RUST_LOG=debug cargo run -- 6202020202020202020202
//!
//! # Only this crate
//! RUST_LOG=paczko_track=debug cargo run -- 6202020202020202020202
//! ```
//!
//! ## Workflow Trace Example
//!
//! ```text
//! INFO track: Tracking shipment shipment_number="620..." providers=2
//! DEBUG track:query: Query finished elapsed_ms=112 ok=true
//! INFO track:report: Detail sent message_id=msg_2 steps=3
//! INFO track: Board finished consumed=2 found=1 not_found=1 failed=0
//! ```

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - spans carry the context
        .compact() // Compact format shows spans inline (e.g., "track:query")
        .init();
}
