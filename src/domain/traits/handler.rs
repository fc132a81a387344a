use async_trait::async_trait;

use crate::application::context::AppContext;
use crate::application::errors::BotError;
use crate::domain::entities::{CommandOptions, GatewayEvent, InteractionContext, MessageContext};

/// Prefix command body
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn execute(
        &self,
        app: &AppContext,
        ctx: &MessageContext,
        args: &[String],
    ) -> Result<(), BotError>;
}

/// Slash command body
#[async_trait]
pub trait SlashCommandHandler: Send + Sync {
    async fn execute(
        &self,
        app: &AppContext,
        ctx: &InteractionContext,
        options: &CommandOptions,
    ) -> Result<(), BotError>;
}

#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, app: &AppContext, event: &GatewayEvent) -> Result<(), BotError>;
}
