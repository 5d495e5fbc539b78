use crate::application::errors::BotError;
use crate::application::messaging::MessageDispatcher;
use crate::domain::entities::Message;
use crate::domain::traits::Bot;

/// Service for processing messages: dispatch, then reply through the bot
pub struct MessageService<B: Bot> {
    bot: B,
    dispatcher: MessageDispatcher,
}

impl<B: Bot> MessageService<B> {
    pub fn new(bot: B, dispatcher: MessageDispatcher) -> Self {
        Self { bot, dispatcher }
    }

    pub fn bot(&self) -> &B {
        &self.bot
    }

    pub fn dispatcher(&self) -> &MessageDispatcher {
        &self.dispatcher
    }

    /// Process an incoming message and send the reply, returning its text.
    /// Delivery failures are the caller's to log; nothing is retried here.
    pub async fn process(&self, message: &Message) -> Result<String, BotError> {
        let reply = self.dispatcher.dispatch(message).await;

        let preview: String = reply.chars().take(100).collect();
        tracing::info!("Sending response to chat_id {}: {}", message.chat_id, preview.trim());

        self.bot.reply_to(message, &reply).await?;
        Ok(reply)
    }
}
