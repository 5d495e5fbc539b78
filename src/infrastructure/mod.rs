//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Storage: State store adapter and its Redis / in-memory backends
//! - Random: Random sources
//! - Adapters: Platform integrations (Telegram, console)

pub mod config;
pub mod storage;
pub mod random;
pub mod adapters;
