//! Telegram adapter

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::application::errors::BotError;
use crate::domain::entities::{self, ContentType};
use crate::domain::traits::{Bot, BotInfo};

/// Telegram API base URL
const API_BASE: &str = "https://api.telegram.org";

/// Telegram update type
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Message {
    pub message_id: i64,
    pub from: Option<User>,
    pub chat: Chat,
    #[serde(default)]
    pub date: i64,
    pub text: Option<String>,
    pub photo: Option<serde_json::Value>,
    pub document: Option<serde_json::Value>,
    pub audio: Option<serde_json::Value>,
    pub video: Option<serde_json::Value>,
    pub voice: Option<serde_json::Value>,
    pub sticker: Option<serde_json::Value>,
    pub location: Option<serde_json::Value>,
    pub contact: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Chat {
    pub id: i64,
}

/// Envelope every Bot API method answers with
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

impl Message {
    pub fn content_type(&self) -> ContentType {
        if self.text.is_some() {
            ContentType::Text
        } else if self.photo.is_some() {
            ContentType::Photo
        } else if self.document.is_some() {
            ContentType::Document
        } else if self.audio.is_some() {
            ContentType::Audio
        } else if self.video.is_some() {
            ContentType::Video
        } else if self.voice.is_some() {
            ContentType::Voice
        } else if self.sticker.is_some() {
            ContentType::Other("sticker".to_string())
        } else if self.location.is_some() {
            ContentType::Other("location".to_string())
        } else if self.contact.is_some() {
            ContentType::Other("contact".to_string())
        } else {
            ContentType::Other("unknown".to_string())
        }
    }

    /// Domain message; channel posts and other sender-less updates are rejected
    pub fn into_message(self) -> Result<entities::Message, BotError> {
        let content_type = self.content_type();
        let from = self
            .from
            .ok_or_else(|| BotError::Parse(format!("message {} has no sender", self.message_id)))?;

        let mut sender = entities::User::new(from.id);
        sender.username = from.username;
        sender.first_name = from.first_name;

        let mut message = entities::Message::new(self.message_id, self.chat.id, sender, content_type);
        message.text = self.text;
        if let Some(ts) = chrono::DateTime::from_timestamp(self.date, 0).filter(|_| self.date > 0) {
            message = message.with_timestamp(ts);
        }
        Ok(message)
    }
}

/// Telegram bot adapter
pub struct TelegramAdapter {
    token: String,
    client: Client,
    info: BotInfo,
}

impl TelegramAdapter {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            client: Client::new(),
            info: BotInfo {
                id: "unknown".to_string(),
                name: "chatter-bot".to_string(),
                username: "unknown".to_string(),
            },
        }
    }

    /// Get the API URL for a method
    fn api_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", API_BASE, self.token, method)
    }

    /// Unwrap the Bot API envelope. 401/404 mean the token is bad.
    async fn read_result<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, BotError> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::NOT_FOUND {
            return Err(BotError::Auth(format!("Telegram rejected the bot token ({})", status)));
        }

        let body: ApiResponse<T> = response
            .json()
            .await
            .map_err(|e| BotError::Parse(e.to_string()))?;

        if !status.is_success() || !body.ok {
            let reason = body.description.unwrap_or_else(|| status.to_string());
            return Err(BotError::Network(format!("Telegram API error: {}", reason)));
        }

        body.result
            .ok_or_else(|| BotError::Parse("Telegram response without result".to_string()))
    }

    /// Fetch bot info from Telegram API
    pub async fn fetch_bot_info(&mut self) -> Result<(), BotError> {
        #[derive(Deserialize)]
        struct BotInfoResponse {
            id: i64,
            first_name: String,
            username: Option<String>,
        }

        let response = self.client
            .get(self.api_url("getMe"))
            .send()
            .await
            .map_err(|e| BotError::Network(e.to_string()))?;

        let data: BotInfoResponse = Self::read_result(response).await?;

        self.info = BotInfo {
            id: data.id.to_string(),
            username: data.username.unwrap_or_else(|| data.first_name.clone()),
            name: data.first_name,
        };

        Ok(())
    }

    /// Get updates from Telegram using getUpdates API
    pub async fn get_updates(&self, offset: i64, timeout: u64) -> Result<Vec<Update>, BotError> {
        #[derive(Serialize)]
        struct GetUpdatesRequest {
            offset: i64,
            timeout: u64,
            allowed_updates: Vec<String>,
        }

        let request = GetUpdatesRequest {
            offset,
            timeout,
            allowed_updates: vec!["message".to_string()],
        };

        let response = self.client
            .post(self.api_url("getUpdates"))
            .json(&request)
            .send()
            .await
            .map_err(|e| BotError::Network(e.to_string()))?;

        Self::read_result(response).await
    }

    /// Get the next update offset
    pub fn get_next_offset(updates: &[Update], current: i64) -> i64 {
        updates.iter()
            .map(|u| u.update_id + 1)
            .max()
            .unwrap_or(current)
            .max(current)
    }

    /// Send a plain-text message, threaded under `reply_to` when given
    pub async fn send_message(&self, chat_id: i64, text: &str, reply_to: Option<i64>) -> Result<String, BotError> {
        #[derive(Serialize)]
        struct SendMessageRequest<'a> {
            chat_id: i64,
            text: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            reply_to_message_id: Option<i64>,
            allow_sending_without_reply: bool,
        }

        #[derive(Deserialize)]
        struct MessageResult {
            message_id: i64,
        }

        let request = SendMessageRequest {
            chat_id,
            text,
            reply_to_message_id: reply_to,
            allow_sending_without_reply: true,
        };

        let response = self.client
            .post(self.api_url("sendMessage"))
            .json(&request)
            .send()
            .await
            .map_err(|e| BotError::Network(e.to_string()))?;

        let data: MessageResult = Self::read_result(response).await?;
        Ok(data.message_id.to_string())
    }

    /// Publish the command menu with Telegram
    pub async fn register_commands<'a>(
        &self,
        commands: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<(), BotError> {
        #[derive(Serialize)]
        struct Command<'a> {
            command: &'a str,
            description: &'a str,
        }

        #[derive(Serialize)]
        struct SetMyCommandsRequest<'a> {
            commands: Vec<Command<'a>>,
        }

        let request = SetMyCommandsRequest {
            commands: commands
                .into_iter()
                .map(|(command, description)| Command { command, description })
                .collect(),
        };

        let response = self.client
            .post(self.api_url("setMyCommands"))
            .json(&request)
            .send()
            .await
            .map_err(|e| BotError::Network(e.to_string()))?;

        let _: bool = Self::read_result(response).await?;
        tracing::info!("Registered {} bot commands with Telegram", request.commands.len());
        Ok(())
    }
}

#[async_trait]
impl Bot for TelegramAdapter {
    async fn start(&self) -> Result<(), BotError> {
        let token_prefix: String = self.token.chars().take(8).collect();
        tracing::info!("Starting Telegram bot (token: {}...)", token_prefix);
        Ok(())
    }

    async fn reply_to(&self, message: &entities::Message, text: &str) -> Result<String, BotError> {
        tracing::debug!("Replying to {} in {}", message.message_id, message.chat_id);
        self.send_message(message.chat_id, text, Some(message.message_id)).await
    }

    fn bot_info(&self) -> BotInfo {
        self.info.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(json: &str) -> Update {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_text_update_to_domain() {
        let u = update(
            r#"{"update_id": 10, "message": {"message_id": 5, "date": 1700000000,
                "from": {"id": 42, "is_bot": false, "first_name": "Alice"},
                "chat": {"id": -100, "type": "group"}, "text": "/echo hi"}}"#,
        );
        let msg = u.message.unwrap().into_message().unwrap();
        assert_eq!(msg.message_id, 5);
        assert_eq!(msg.chat_id, -100);
        assert_eq!(msg.sender.id, 42);
        assert_eq!(msg.sender.first_name.as_deref(), Some("Alice"));
        assert_eq!(msg.content_type, ContentType::Text);
        assert_eq!(msg.text(), "/echo hi");
        assert_eq!(msg.timestamp.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_media_content_types() {
        let photo = update(
            r#"{"update_id": 1, "message": {"message_id": 1, "from": {"id": 1},
                "chat": {"id": 1}, "photo": [{"file_id": "x"}], "caption": "look"}}"#,
        );
        assert_eq!(photo.message.unwrap().content_type(), ContentType::Photo);

        let voice = update(
            r#"{"update_id": 2, "message": {"message_id": 2, "from": {"id": 1},
                "chat": {"id": 1}, "voice": {"file_id": "y"}}}"#,
        );
        assert_eq!(voice.message.unwrap().content_type(), ContentType::Voice);

        let sticker = update(
            r#"{"update_id": 3, "message": {"message_id": 3, "from": {"id": 1},
                "chat": {"id": 1}, "sticker": {"file_id": "z"}}}"#,
        );
        assert_eq!(
            sticker.message.unwrap().content_type(),
            ContentType::Other("sticker".to_string())
        );
    }

    #[test]
    fn test_senderless_message_rejected() {
        let u = update(r#"{"update_id": 4, "message": {"message_id": 9, "chat": {"id": 1}, "text": "hi"}}"#);
        assert!(matches!(u.message.unwrap().into_message(), Err(BotError::Parse(_))));
    }

    #[tokio::test]
    async fn test_start_with_multibyte_token() {
        let bot = TelegramAdapter::new("ключ-токен:abc");
        assert!(bot.start().await.is_ok());
    }

    #[test]
    fn test_next_offset() {
        let updates = vec![
            update(r#"{"update_id": 7}"#),
            update(r#"{"update_id": 9}"#),
        ];
        assert_eq!(TelegramAdapter::get_next_offset(&updates, 0), 10);
        assert_eq!(TelegramAdapter::get_next_offset(&[], 10), 10);
    }
}
