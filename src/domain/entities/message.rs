use super::User;
use chrono::{DateTime, Utc};

/// Type of inbound content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentType {
    Text,
    Photo,
    Document,
    Audio,
    Video,
    Voice,
    Other(String),
}

impl ContentType {
    pub fn as_str(&self) -> &str {
        match self {
            ContentType::Text => "text",
            ContentType::Photo => "photo",
            ContentType::Document => "document",
            ContentType::Audio => "audio",
            ContentType::Video => "video",
            ContentType::Voice => "voice",
            ContentType::Other(s) => s,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, ContentType::Text)
    }
}

/// One inbound unit delivered by the messaging backend
#[derive(Debug, Clone)]
pub struct Message {
    pub message_id: i64,
    pub chat_id: i64,
    pub sender: User,
    pub text: Option<String>,
    pub content_type: ContentType,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(message_id: i64, chat_id: i64, sender: User, content_type: ContentType) -> Self {
        Self {
            message_id,
            chat_id,
            sender,
            text: None,
            content_type,
            timestamp: Utc::now(),
        }
    }

    pub fn from_text(chat_id: i64, sender: User, text: impl Into<String>) -> Self {
        Self::new(0, chat_id, sender, ContentType::Text).with_text(text)
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_message_id(mut self, message_id: i64) -> Self {
        self.message_id = message_id;
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Text body, empty when the backend sent none
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}
