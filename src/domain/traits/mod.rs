//! Domain traits - Abstractions for handlers and platform implementations

pub mod bot;
pub mod handler;

pub use bot::{CommandRegistrar, Gateway, Responder};
pub use handler::{CommandHandler, EventHandler, SlashCommandHandler};
