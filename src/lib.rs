//! chatter-bot - keyword-driven chat bot with a resilient Redis-backed state store

pub mod domain;
pub mod application;
pub mod infrastructure;
