use async_trait::async_trait;

use crate::application::context::AppContext;
use crate::application::errors::BotError;
use crate::domain::entities::{CommandOptions, InteractionContext, Reply, SlashCommandDescriptor};
use crate::domain::traits::SlashCommandHandler;
use crate::infrastructure::plugins::Registration;

pub const REGISTRATION: Registration<SlashCommandDescriptor> = Registration::new(file!(), build);

fn build() -> Result<SlashCommandDescriptor, BotError> {
    Ok(SlashCommandDescriptor::new("ping", Ping).with_description("Replies with Pong!"))
}

struct Ping;

#[async_trait]
impl SlashCommandHandler for Ping {
    async fn execute(
        &self,
        _app: &AppContext,
        ctx: &InteractionContext,
        _options: &CommandOptions,
    ) -> Result<(), BotError> {
        ctx.reply(Reply::public("Pong!")).await
    }
}
