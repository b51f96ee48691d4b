//! # paczko-track demo
//!
//! Runs one `/track` invocation against a handful of in-process providers and
//! a transport that writes every message to the log.
//!
//! ```bash
//! RUST_LOG=info cargo run -- 620123456789012345678901
//! PACZKO_QUERY_TIMEOUT_SECS=2 RUST_LOG=debug cargo run -- JJD000030123456
//! ```

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Local};
use paczko_track::framework::mock::{MockTrackingService, NumberRule, StaticProvider};
use paczko_track::framework::{ChatTransport, Provider, QueryError, TransportError};
use paczko_track::lifecycle::{setup_tracing, TrackConfig, TrackSystem};
use paczko_track::model::{
    ChatId, CommandArguments, EditMessage, MessageId, OutgoingMessage, TrackingData, TrackingStep,
};
use paczko_track::track::ProviderRegistry;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Writes every message to the log instead of a chat.
#[derive(Default)]
struct LogTransport {
    next_id: AtomicI32,
}

#[async_trait]
impl ChatTransport for LogTransport {
    async fn send_message(&self, message: OutgoingMessage) -> Result<MessageId, TransportError> {
        let id = MessageId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        info!(
            %id,
            reply_to = ?message.reply_to,
            action = ?message.action.as_ref().map(|a| a.payload.as_str()),
            "send\n{}",
            message.text
        );
        Ok(id)
    }

    async fn edit_message(&self, edit: EditMessage) -> Result<(), TransportError> {
        info!(id = %edit.message_id, "edit\n{}", edit.text);
        Ok(())
    }
}

fn demo_registry() -> ProviderRegistry {
    let providers: Vec<Arc<dyn Provider>> = vec![
        Arc::new(StaticProvider::new("InPost", NumberRule::Digits(24))),
        Arc::new(StaticProvider::new("DHL", NumberRule::Prefix("JJD".into()))),
        Arc::new(StaticProvider::new("Poczta Polska", NumberRule::Any)),
        Arc::new(StaticProvider::new("GLS", NumberRule::Any)),
    ];
    ProviderRegistry::new(providers)
}

fn demo_service(shipment_number: &str) -> MockTrackingService {
    let now = Local::now().naive_local();
    let mut service = MockTrackingService::new();

    service
        .expect_query("InPost")
        .after(Duration::from_millis(400))
        .return_ok(
            TrackingData::new(shipment_number, "InPost")
                .with_steps(vec![
                    TrackingStep::new(now - ChronoDuration::hours(30), "Przesyłka utworzona"),
                    TrackingStep::new(now - ChronoDuration::hours(20), "Przyjęta w oddziale")
                        .at("Warszawa"),
                    TrackingStep::new(now - ChronoDuration::hours(2), "Umieszczona w paczkomacie")
                        .at("KRA01M"),
                ])
                .with_destination("Kraków"),
        );
    service
        .expect_query("DHL")
        .after(Duration::from_millis(250))
        .return_ok(
            TrackingData::new(shipment_number, "DHL")
                .with_steps(vec![TrackingStep::new(now, "Shipment information received")]),
        );
    service
        .expect_query("Poczta Polska")
        .after(Duration::from_millis(150))
        .return_err(QueryError::NotFound);
    service
        .expect_query("GLS")
        .after(Duration::from_millis(600))
        .return_err(QueryError::provider("upstream returned 502"));
    service
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let shipment_number = std::env::args().nth(1).unwrap_or_default();
    let config = TrackConfig::from_env();
    info!(?config, "Starting paczko-track demo");

    let mut system = TrackSystem::new(
        demo_registry(),
        Arc::new(demo_service(&shipment_number)),
        Arc::new(LogTransport::default()),
        config,
    );

    system.spawn_track(CommandArguments::new(
        ChatId(1),
        MessageId(0),
        vec![shipment_number],
    ));

    for result in system.shutdown().await? {
        match result {
            Ok(summary) => info!(
                found = summary.found,
                not_found = summary.not_found,
                failed = summary.failed,
                "Invocation finished"
            ),
            Err(e) => error!(error = %e, "Invocation rejected"),
        }
    }

    info!("Demo completed");
    Ok(())
}
