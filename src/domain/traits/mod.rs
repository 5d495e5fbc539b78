//! Domain traits - Abstractions for infrastructure implementations

pub mod bot;
pub mod store;
pub mod random;

pub use bot::{Bot, BotInfo};
pub use store::KeyValueStore;
pub use random::{choose, RandomSource};
