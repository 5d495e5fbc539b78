//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use crate::application::errors::ConfigError;
use crate::infrastructure::storage::StoreEndpoint;

/// Bot configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub bot: BotConfig,
    pub telegram: TelegramConfig,
    pub store: StoreConfig,
    pub random: RandomConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct BotConfig {
    pub name: String,
    pub prefix: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TelegramConfig {
    pub token: Option<String>,
    /// Long-poll timeout passed to `getUpdates`
    pub poll_timeout_seconds: u64,
    /// Back-off after a failed `getUpdates`
    pub retry_delay_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct StoreConfig {
    /// `redis://`, `rediss://` or `memory://`. Unset means degraded mode.
    pub url: Option<String>,
    pub max_attempts: u32,
    pub retry_delay_seconds: u64,
    pub tls_timeout_seconds: u64,
    pub plain_timeout_seconds: u64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RandomConfig {
    /// Fixed seed for reproducible replies
    pub seed: Option<u64>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: "chatter-bot".to_string(),
            prefix: "/".to_string(),
        }
    }
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            token: None,
            poll_timeout_seconds: 30,
            retry_delay_seconds: 5,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_attempts: 3,
            retry_delay_seconds: 2,
            tls_timeout_seconds: 30,
            plain_timeout_seconds: 10,
        }
    }
}

impl StoreConfig {
    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_seconds)
    }

    pub fn endpoint(&self) -> Option<StoreEndpoint> {
        self.url.as_ref().map(|url| {
            StoreEndpoint::parse(
                url.clone(),
                Duration::from_secs(self.tls_timeout_seconds),
                Duration::from_secs(self.plain_timeout_seconds),
            )
        })
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay `TELEGRAM_TOKEN`, `REDIS_URL` and `BOT_PREFIX`
    pub fn apply_env(&mut self) {
        self.apply_vars(|name| std::env::var(name).ok());
    }

    fn apply_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(token) = var("TELEGRAM_TOKEN").filter(|t| !t.trim().is_empty()) {
            self.telegram.token = Some(token);
        }

        if let Some(url) = var("REDIS_URL").filter(|u| !u.trim().is_empty()) {
            self.store.url = Some(url);
        }

        if let Some(prefix) = var("BOT_PREFIX").filter(|p| !p.is_empty()) {
            self.bot.prefix = prefix;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bot.prefix.is_empty() || self.bot.prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidValue(format!("bot.prefix {:?}", self.bot.prefix)));
        }
        if self.store.max_attempts == 0 {
            return Err(ConfigError::InvalidValue("store.max-attempts must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Token required to talk to Telegram; missing is fatal for `run`
    pub fn telegram_token(&self) -> Result<&str, ConfigError> {
        self.telegram
            .token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ConfigError::MissingField("TELEGRAM_TOKEN".to_string()))
    }
}
