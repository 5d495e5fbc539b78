//! Domain layer - Core business logic with no external dependencies
//! 
//! This layer contains:
//! - Entities: Core business objects (User, Message, Command, IntentRule)
//! - Traits: Abstractions for infrastructure (Bot, KeyValueStore, RandomSource)

pub mod entities;
pub mod traits;
