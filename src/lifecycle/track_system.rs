use crate::framework::{ChatTransport, TrackingService};
use crate::lifecycle::TrackConfig;
use crate::model::CommandArguments;
use crate::track::{BoardSummary, ProviderRegistry, TrackCommand, TrackError};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info, Instrument};

/// The runtime orchestrator for `/track` invocations.
///
/// `TrackSystem` is responsible for:
/// - **Wiring**: Handing the registry, tracking service, transport and config to every command
/// - **Concurrency**: Running each invocation in its own task, independent of the others
/// - **Shutdown**: Waiting for every invocation still in progress
///
/// Identical invocations from different users are not coalesced: each one
/// starts its own fan-out.
///
/// # Example
///
/// ```ignore
/// let mut system = TrackSystem::new(registry, service, transport, TrackConfig::from_env());
///
/// // Each command runs in the background
/// system.spawn_track(args);
///
/// // Wait for everything in flight
/// system.shutdown().await?;
/// ```
pub struct TrackSystem {
    command: TrackCommand,

    /// Task handles for invocations started with `spawn_track`
    handles: Vec<JoinHandle<Result<BoardSummary, TrackError>>>,
}

impl TrackSystem {
    pub fn new(
        registry: ProviderRegistry,
        service: Arc<dyn TrackingService>,
        transport: Arc<dyn ChatTransport>,
        config: TrackConfig,
    ) -> Self {
        info!(
            providers = registry.len(),
            query_timeout = ?config.query_timeout,
            "Track system ready"
        );
        Self {
            command: TrackCommand::new(registry, service, transport, config),
            handles: Vec::new(),
        }
    }

    /// The command, for dispatchers that call it directly.
    pub fn track_command(&self) -> &TrackCommand {
        &self.command
    }

    /// Starts an invocation in the background.
    pub fn spawn_track(&mut self, args: CommandArguments) {
        let command = self.command.clone();
        let span = tracing::info_span!("invocation", message_id = %args.message_id);
        let handle = tokio::spawn(async move { command.track(&args).await }.instrument(span));
        self.handles.push(handle);
    }

    /// Waits for every invocation started with `spawn_track`.
    ///
    /// # Returns
    ///
    /// - `Ok(results)` with one entry per invocation, in start order
    /// - `Err(String)` if any invocation task panicked
    pub async fn shutdown(self) -> Result<Vec<Result<BoardSummary, TrackError>>, String> {
        info!(in_flight = self.handles.len(), "Shutting down track system...");

        let mut results = Vec::with_capacity(self.handles.len());
        for handle in self.handles {
            match handle.await {
                Ok(result) => results.push(result),
                Err(e) => {
                    error!("Invocation task failed: {:?}", e);
                    return Err(format!("Invocation task failed: {:?}", e));
                }
            }
        }

        info!("Track system shutdown complete.");
        Ok(results)
    }
}
