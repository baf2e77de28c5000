use crate::application::errors::BotError;
use crate::domain::entities::Message;
use async_trait::async_trait;

/// Bot trait - abstraction for messaging platform adapters
#[async_trait]
pub trait Bot: Send + Sync {
    /// Connect to the platform and begin listening for messages
    async fn start(&mut self) -> Result<(), BotError>;

    /// Receive the next inbound message; None when the stream has closed
    async fn next_message(&mut self) -> Option<Message>;

    /// Send a message to a chat
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), BotError>;

    /// Close the platform connection
    async fn close(&mut self) -> Result<(), BotError>;

    /// Get bot info
    fn bot_info(&self) -> BotInfo;
}

/// Bot information
#[derive(Debug, Clone)]
pub struct BotInfo {
    pub id: String,
    pub name: String,
    pub username: String,
}
