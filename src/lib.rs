//! slate-bot - a Discord bot scaffold with prefix commands, slash commands
//! and gateway event handlers loaded from a static registration table

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod modules;

pub use application::context::AppContext;
pub use application::errors::BotError;
pub use bootstrap::Bootstrap;
