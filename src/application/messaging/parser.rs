//! Message parser - Splits command text into name and argument

use crate::domain::entities::CommandInput;

/// Parses the leading command token out of message text
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

    /// `"/echo@my_bot  hello world "` gives name `echo`, argument `hello world`.
    /// Returns `None` for text that is not shaped like a command.
    pub fn parse_command(&self, text: &str) -> Option<CommandInput> {
        let rest = text.strip_prefix(self.command_prefix.as_str())?;

        let (token, argument) = match rest.find(char::is_whitespace) {
            Some(i) => (&rest[..i], rest[i..].trim()),
            None => (rest, ""),
        };

        // Telegram appends the bot's username in groups
        let name = token.split('@').next().unwrap_or_default();
        if name.is_empty() {
            return None;
        }

        Some(CommandInput::new(name, argument))
    }
}

impl Default for MessageParser {
    fn default() -> Self {
        Self::new("/")
    }
}
