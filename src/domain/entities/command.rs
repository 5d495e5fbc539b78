use std::collections::HashMap;

use crate::application::errors::CommandError;

/// What a command does once its argument has been validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandAction {
    Start,
    Help,
    Info,
    Echo,
    Weather,
    Translate,
    Qr,
    Short,
    Joke,
    Roll,
    Coin,
    Random,
    Stats,
    Feedback,
}

/// Represents a bot command
#[derive(Debug, Clone)]
pub struct Command {
    pub name: String,
    pub description: Option<String>,
    /// Reply sent instead of running the action when the argument is blank.
    /// Present only for commands that require an argument.
    pub usage: Option<String>,
    pub action: CommandAction,
}

impl Command {
    pub fn new(name: impl Into<String>, action: CommandAction) -> Self {
        Self {
            name: name.into(),
            description: None,
            usage: None,
            action,
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Mark the command as requiring an argument
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    pub fn requires_argument(&self) -> bool {
        self.usage.is_some()
    }
}

/// A command token parsed out of a message, before lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInput {
    pub name: String,
    pub argument: String,
}

impl CommandInput {
    pub fn new(name: impl Into<String>, argument: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            argument: argument.into(),
        }
    }

    pub fn has_argument(&self) -> bool {
        !self.argument.trim().is_empty()
    }
}

/// Command registry, fixed once the router is built
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, command: Command) -> Result<(), CommandError> {
        let name = command.name.clone();
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(CommandError::InvalidName(name));
        }
        if self.index.contains_key(&name) {
            return Err(CommandError::Duplicate(name));
        }

        self.index.insert(name, self.commands.len());
        self.commands.push(command);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Command> {
        self.index.get(name).map(|&i| &self.commands[i])
    }

    /// Commands in registration order
    pub fn all(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
