//! Message dispatcher - Routes one inbound message to exactly one reply

use std::sync::Arc;

use crate::application::errors::CommandError;
use crate::application::services::{CommandRouter, ResponseGenerator, Route};
use crate::domain::entities::Message;
use crate::domain::traits::RandomSource;
use crate::infrastructure::config::Config;
use crate::infrastructure::random::{SeededRandom, ThreadRandom};
use crate::infrastructure::storage::StateStore;
use super::classifier::IntentClassifier;

/// Media first, then known commands, then the intent classifier
pub struct MessageDispatcher {
    router: CommandRouter,
    classifier: IntentClassifier,
    responses: ResponseGenerator,
}

impl MessageDispatcher {
    pub fn new(router: CommandRouter, responses: ResponseGenerator) -> Self {
        Self {
            router,
            classifier: IntentClassifier::new(),
            responses,
        }
    }

    /// Wire the default command table, random source and shared store
    pub fn from_config(
        config: &Config,
        store: Arc<StateStore>,
        bot_username: &str,
    ) -> Result<Self, CommandError> {
        let rng: Arc<dyn RandomSource> = match config.random.seed {
            Some(seed) => {
                tracing::info!("Using seeded random source ({})", seed);
                Arc::new(SeededRandom::new(seed))
            }
            None => Arc::new(ThreadRandom),
        };

        let router = CommandRouter::with_defaults(config.bot.prefix.clone())?;
        let responses = ResponseGenerator::new(store, rng).with_bot_username(bot_username);
        Ok(Self::new(router, responses))
    }

    pub fn router(&self) -> &CommandRouter {
        &self.router
    }

    pub fn responses(&self) -> &ResponseGenerator {
        &self.responses
    }

    /// Never fails: store trouble and bad input both end in a normal reply
    pub async fn dispatch(&self, message: &Message) -> String {
        let preview: String = message.text().chars().take(50).collect();
        tracing::debug!(
            "[{}] {} from {}: {}",
            message.chat_id,
            message.content_type.as_str(),
            message.sender,
            preview
        );

        if !message.content_type.is_text() {
            return self.responses.media_ack(&message.content_type);
        }

        let text = message.text();
        if let Some(route) = self.router.route(text) {
            return match route {
                Route::Usage(usage) => usage.to_string(),
                Route::Execute { action, input } => {
                    self.responses.execute(action, &input, &message.sender).await
                }
            };
        }

        let classification = self.classifier.classify(text);
        tracing::debug!("[{}] Intent: {:?}", message.chat_id, classification.intent);
        self.responses.reply_to_text(&message.sender, &classification).await
    }
}
