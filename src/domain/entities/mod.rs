//! Domain entities - Core business objects with no external dependencies

pub mod user;
pub mod message;
pub mod command;
pub mod intent;
pub mod feedback;

pub use user::{User, UserStats};
pub use message::{Message, ContentType};
pub use command::{Command, CommandAction, CommandInput, CommandRegistry};
pub use intent::{Intent, IntentRule, Mood, MoodBranch, ResponseStrategy};
pub use feedback::FeedbackRecord;
