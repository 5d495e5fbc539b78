//! Application layer - Use cases and business logic
//! 
//! This layer contains:
//! - Services: Command routing, response generation, reply delivery
//! - Messaging: Message parsing, intent classification, dispatching
//! - Templates: Reply texts
//! - Errors: Domain-specific errors

pub mod errors;
pub mod services;
pub mod messaging;
pub mod templates;
