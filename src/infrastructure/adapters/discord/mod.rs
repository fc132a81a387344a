//! Discord adapter
//!
//! Gateway events and replies go through serenity; command registration
//! is a single REST call made with reqwest.

pub mod gateway;
pub mod responder;
pub mod rest;

pub use gateway::DiscordGateway;
pub use responder::{ChannelResponder, InteractionResponder, InteractionTarget};
pub use rest::RestRegistrar;
