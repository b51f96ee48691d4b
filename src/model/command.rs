use crate::model::{ChatId, MessageId};

/// What the command dispatcher hands to a command after parsing an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandArguments {
    /// Positional arguments, command name excluded.
    pub arguments: Vec<String>,
    /// Chat the command was issued in.
    pub chat_id: ChatId,
    /// The message that carried the command.
    pub message_id: MessageId,
}

impl CommandArguments {
    pub fn new(chat_id: ChatId, message_id: MessageId, arguments: Vec<String>) -> Self {
        Self {
            arguments,
            chat_id,
            message_id,
        }
    }

    /// The first positional argument, if present.
    pub fn first(&self) -> Option<&str> {
        self.arguments.first().map(String::as_str)
    }
}
