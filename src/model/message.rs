//! Outgoing chat messages and the identifiers the transport hands back.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for a chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatId(pub i64);

impl Display for ChatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "chat_{}", self.0)
    }
}

/// Type-safe identifier for a message within a chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub i32);

impl Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "msg_{}", self.0)
    }
}

/// Markup the transport should interpret the text as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ParseMode {
    #[default]
    Html,
    Plain,
}

/// A single inline button attached below a message.
///
/// Activating it is equivalent to the requester sending `payload` as a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineAction {
    pub label: String,
    pub payload: String,
}

impl InlineAction {
    /// The "follow this shipment" action offered under every detail message.
    pub fn follow(label: impl Into<String>, shipment_number: &str) -> Self {
        Self {
            label: label.into(),
            payload: format!("/follow {}", shipment_number),
        }
    }
}

/// A new message to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub chat_id: ChatId,
    pub text: String,
    pub parse_mode: ParseMode,
    pub reply_to: Option<MessageId>,
    pub action: Option<InlineAction>,
}

impl OutgoingMessage {
    /// Creates an HTML message with no reply target and no action.
    pub fn html(chat_id: ChatId, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            parse_mode: ParseMode::Html,
            reply_to: None,
            action: None,
        }
    }

    pub fn reply_to(mut self, message_id: MessageId) -> Self {
        self.reply_to = Some(message_id);
        self
    }

    pub fn with_action(mut self, action: InlineAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// Replacement text for a message that was already sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditMessage {
    pub chat_id: ChatId,
    pub message_id: MessageId,
    pub text: String,
    pub parse_mode: ParseMode,
}
