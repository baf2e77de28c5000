//! Message parser - Parses raw text into structured messages

use crate::domain::entities::{Content, Message, User};

/// Parses incoming text into structured Message objects
pub struct MessageParser {
    command_prefix: String,
}

impl MessageParser {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            command_prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.command_prefix
    }

    /// Parse a text message; prefix-marked text becomes a command
    pub fn parse(
        &self,
        chat_id: impl Into<String>,
        text: impl Into<String>,
        sender: Option<User>,
    ) -> Message {
        let text = text.into();
        let chat_id = chat_id.into();

        if let Some(cmd_text) = text.strip_prefix(&self.command_prefix) {
            return self.parse_command(chat_id, cmd_text, sender);
        }

        let message = Message::new(chat_id, Content::Text(text));
        match sender {
            Some(user) => message.with_sender(user),
            None => message,
        }
    }

    fn parse_command(&self, chat_id: String, cmd_text: &str, sender: Option<User>) -> Message {
        let mut parts = cmd_text.split_whitespace();
        let name = parts.next().unwrap_or("").to_string();
        let args: Vec<String> = parts.map(|s| s.to_string()).collect();

        let message = Message::new(chat_id, Content::Command { name, args });
        match sender {
            Some(user) => message.with_sender(user),
            None => message,
        }
    }
}
