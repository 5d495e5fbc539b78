use async_trait::async_trait;
use crate::domain::entities::Message;
use crate::application::errors::BotError;

/// Bot trait - abstraction for messaging platform adapters
#[async_trait]
pub trait Bot: Send + Sync {
    /// Start the bot and begin listening for messages
    async fn start(&self) -> Result<(), BotError>;

    /// Reply to an inbound message, returning the id of the sent message
    async fn reply_to(&self, message: &Message, text: &str) -> Result<String, BotError>;

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
