//! Console adapter for development/testing

use async_trait::async_trait;
use std::io::Write;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

use crate::application::errors::BotError;
use crate::domain::entities::{Message, User};
use crate::domain::traits::{Bot, BotInfo};

/// Id used for the local console user
pub const CONSOLE_USER_ID: i64 = 0;

/// Console bot adapter for local development
pub struct ConsoleAdapter {
    info: BotInfo,
    lines: Mutex<Lines<BufReader<Stdin>>>,
    next_id: AtomicI64,
}

impl ConsoleAdapter {
    pub fn new() -> Self {
        Self {
            info: BotInfo {
                id: "console".to_string(),
                name: "chatter-bot".to_string(),
                username: "console".to_string(),
            },
            lines: Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Next stdin line as a message from the console user; `None` at EOF
    pub async fn read_message(&self, prompt: &str) -> Option<Message> {
        print!("{}", prompt);
        let _ = std::io::stdout().flush();

        let line = match self.lines.lock().await.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => return None,
            Err(e) => {
                tracing::error!("Failed to read stdin: {}", e);
                return None;
            }
        };

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let sender = User::new(CONSOLE_USER_ID).with_first_name("console");
        Some(Message::from_text(CONSOLE_USER_ID, sender, line.trim()).with_message_id(id))
    }
}

impl Default for ConsoleAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Bot for ConsoleAdapter {
    async fn start(&self) -> Result<(), BotError> {
        tracing::info!("Starting console bot (dev mode)");
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<String, BotError> {
        println!("[BOT] {}", text.trim());
        Ok(format!("console_reply_{}", message.message_id))
    }

    fn bot_info(&self) -> BotInfo {
        self.info.clone()
    }
}
