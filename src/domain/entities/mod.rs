//! Domain entities - descriptors, registries and per-invocation contexts

pub mod command;
pub mod event;
pub mod interaction;
pub mod message;
pub mod requirements;
pub mod slash_command;

pub use command::{CommandDescriptor, CommandRegistry};
pub use event::{EventDescriptor, EventRegistry, GatewayEvent};
pub use interaction::{CommandOptions, InteractionContext, InteractionKind, Invoker, OptionValue, Reply};
pub use message::MessageContext;
pub use requirements::{describe_permissions, Requirements};
pub use slash_command::{
    CommandOptionSpec, OptionKind, RegistrationPayload, SlashCommandDescriptor, SlashCommandRegistry,
};
