//! Message handling - Parsing, classification and dispatch

pub mod classifier;
pub mod dispatcher;
pub mod parser;

pub use classifier::{Classification, IntentClassifier};
pub use dispatcher::MessageDispatcher;
pub use parser::MessageParser;
