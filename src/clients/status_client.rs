//! # Status Client
//!
//! Drives the single live status message of one invocation: the first
//! successful delivery sends a new message, every later one edits it in place.
use crate::framework::ChatTransport;
use crate::model::{ChatId, EditMessage, MessageId, OutgoingMessage, ParseMode};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Client for the status message of one invocation.
///
/// Delivery failures are logged and swallowed. A failed first send leaves the
/// handle empty, so the next delivery sends again instead of editing.
pub struct StatusClient {
    transport: Arc<dyn ChatTransport>,
    chat_id: ChatId,
    message_id: Option<MessageId>,
}

impl StatusClient {
    pub fn new(transport: Arc<dyn ChatTransport>, chat_id: ChatId) -> Self {
        Self {
            transport,
            chat_id,
            message_id: None,
        }
    }

    /// The status message, once it exists.
    pub fn message_id(&self) -> Option<MessageId> {
        self.message_id
    }

    /// Shows `text` in the status message, creating it on first use.
    #[instrument(skip(self, text), fields(chat_id = %self.chat_id))]
    pub async fn show(&mut self, text: String) {
        match self.message_id {
            Some(message_id) => {
                debug!(%message_id, "Editing status message");
                let edit = EditMessage {
                    chat_id: self.chat_id,
                    message_id,
                    text,
                    parse_mode: ParseMode::Html,
                };
                if let Err(e) = self.transport.edit_message(edit).await {
                    warn!(%message_id, error = %e, "failed to edit status msg");
                }
            }
            None => {
                debug!("Sending status message");
                let message = OutgoingMessage::html(self.chat_id, text);
                match self.transport.send_message(message).await {
                    Ok(message_id) => self.message_id = Some(message_id),
                    Err(e) => warn!(error = %e, "failed to send status msg"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockTransport;
    use crate::framework::TransportError;

    #[tokio::test]
    async fn sends_once_then_edits() {
        let transport = MockTransport::new();
        let mut client = StatusClient::new(Arc::new(transport.clone()), ChatId(7));

        client.show("one".to_string()).await;
        client.show("two".to_string()).await;
        client.show("three".to_string()).await;

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        let id = client.message_id().unwrap();
        assert_eq!(sent[0].0, id);
        assert_eq!(transport.edits().len(), 2);
        assert_eq!(transport.current_text(id).as_deref(), Some("three"));
    }

    #[tokio::test]
    async fn failed_first_send_is_retried_as_send() {
        let transport = MockTransport::new();
        transport
            .expect_send()
            .return_err(TransportError::Send("network".to_string()));
        let mut client = StatusClient::new(Arc::new(transport.clone()), ChatId(7));

        client.show("one".to_string()).await;
        assert!(client.message_id().is_none());

        client.show("two".to_string()).await;
        assert!(client.message_id().is_some());
        assert!(transport.edits().is_empty());
        transport.verify();
    }

    #[tokio::test]
    async fn failed_edit_keeps_handle() {
        let transport = MockTransport::new();
        transport
            .expect_edit()
            .return_err(TransportError::Edit("not modified".to_string()));
        let mut client = StatusClient::new(Arc::new(transport.clone()), ChatId(7));

        client.show("one".to_string()).await;
        let id = client.message_id();
        client.show("two".to_string()).await;
        client.show("three".to_string()).await;

        assert_eq!(client.message_id(), id);
        assert_eq!(transport.sent().len(), 1);
        assert_eq!(transport.edits().len(), 1);
    }
}
