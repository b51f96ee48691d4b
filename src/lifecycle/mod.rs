//! # System Lifecycle & Orchestration
//!
//! Everything a process needs around the `/track` pipeline itself.
//!
//! **Key Responsibilities:**
//! 1. **Configuration** - [`TrackConfig`] read once from the environment
//! 2. **Wiring** - [`TrackSystem`] hands the registry, service and transport to the command
//! 3. **Concurrency** - every invocation runs in its own task
//! 4. **Graceful Shutdown** - waits for invocations still in flight
//! 5. **Observability Setup** - [`setup_tracing`]
//!
//! ## Late Binding
//!
//! Providers, the tracking service and the transport are all injected. Nothing
//! in the pipeline reaches for a global, so tests wire in the doubles from
//! [`crate::framework::mock`] the same way `main` wires in real ones.

pub mod config;
pub mod track_system;
pub mod tracing;

pub use config::*;
pub use track_system::*;
pub use self::tracing::*;
