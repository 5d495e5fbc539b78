//! Application layer errors

use thiserror::Error;

/// General bot errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Command error: {0}")]
    Command(#[from] CommandError),
}

impl BotError {
    /// Errors that should stop the receive loop instead of being retried
    pub fn is_fatal(&self) -> bool {
        matches!(self, BotError::Config(_) | BotError::Auth(_) | BotError::Command(_))
    }
}

/// Command table errors, raised while the router is being built
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Duplicate command: /{0}")]
    Duplicate(String),

    #[error("Invalid command name: {0:?}")]
    InvalidName(String),
}

/// Key-value store errors
#[derive(Error, Debug, Clone)]
pub enum StorageError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Operation failed: {0}")]
    Operation(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        assert!(BotError::from(ConfigError::MissingField("TELEGRAM_TOKEN".to_string())).is_fatal());
        assert!(BotError::Auth("401".to_string()).is_fatal());
        assert!(BotError::from(CommandError::Duplicate("echo".to_string())).is_fatal());

        assert!(!BotError::Network("timeout".to_string()).is_fatal());
        assert!(!BotError::Parse("bad json".to_string()).is_fatal());
    }

    #[test]
    fn test_storage_error_messages() {
        assert_eq!(
            StorageError::Connection("refused".to_string()).to_string(),
            "Connection failed: refused"
        );
        assert_eq!(
            StorageError::Operation("WRONGTYPE".to_string()).to_string(),
            "Operation failed: WRONGTYPE"
        );
    }
}
