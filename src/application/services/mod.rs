//! Application services - Business logic orchestration

pub mod command_service;
pub mod message_service;
pub mod response_service;

pub use command_service::{CommandRouter, Route};
pub use message_service::MessageService;
pub use response_service::{ResponseGenerator, USERS_SET};
