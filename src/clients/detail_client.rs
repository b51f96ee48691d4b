//! # Detail Client
//!
//! Delivers the per-provider detail message as a reply to the command message.
use crate::framework::ChatTransport;
use crate::model::{ChatId, InlineAction, MessageId, OutgoingMessage, TrackingData};
use crate::track::detail::render_detail;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Client for detail messages of one invocation.
#[derive(Clone)]
pub struct DetailClient {
    transport: Arc<dyn ChatTransport>,
    chat_id: ChatId,
    reply_to: MessageId,
    follow_label: String,
}

impl DetailClient {
    pub fn new(
        transport: Arc<dyn ChatTransport>,
        chat_id: ChatId,
        reply_to: MessageId,
        follow_label: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            chat_id,
            reply_to,
            follow_label: follow_label.into(),
        }
    }

    /// Builds the detail message for one successful reply.
    pub fn message_for(&self, data: &TrackingData) -> OutgoingMessage {
        OutgoingMessage::html(self.chat_id, render_detail(data))
            .reply_to(self.reply_to)
            .with_action(InlineAction::follow(
                self.follow_label.as_str(),
                &data.shipment_number,
            ))
    }

    /// Sends the detail message. Failures are logged and swallowed.
    #[instrument(skip(self, data), fields(provider = %data.provider_name))]
    pub async fn report(&self, data: &TrackingData) {
        let message = self.message_for(data);
        match self.transport.send_message(message).await {
            Ok(message_id) => info!(%message_id, steps = data.tracking_steps.len(), "Detail sent"),
            Err(e) => warn!(error = %e, "failed to send detail msg"),
        }
    }
}
