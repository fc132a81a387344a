use async_trait::async_trait;

use crate::application::context::AppContext;
use crate::application::errors::{BotError, CommandError};
use crate::domain::entities::{
    CommandOptionSpec, CommandOptions, InteractionContext, OptionKind, Reply, SlashCommandDescriptor,
};
use crate::domain::traits::SlashCommandHandler;
use crate::infrastructure::plugins::Registration;

pub const REGISTRATION: Registration<SlashCommandDescriptor> = Registration::new(file!(), build);

fn build() -> Result<SlashCommandDescriptor, BotError> {
    Ok(SlashCommandDescriptor::new("echo", Echo)
        .with_description("Repeats your text")
        .with_option(CommandOptionSpec::new(OptionKind::String, "text", "What to repeat").required())
        .with_option(CommandOptionSpec::new(
            OptionKind::Boolean,
            "private",
            "Only show the reply to you",
        )))
}

struct Echo;

#[async_trait]
impl SlashCommandHandler for Echo {
    async fn execute(
        &self,
        _app: &AppContext,
        ctx: &InteractionContext,
        options: &CommandOptions,
    ) -> Result<(), BotError> {
        let text = options
            .get_str("text")
            .ok_or_else(|| CommandError::InvalidArgs("missing option: text".to_string()))?;

        let reply = if options.get_bool("private").unwrap_or(false) {
            Reply::ephemeral(text)
        } else {
            Reply::public(text)
        };
        ctx.reply(reply).await
    }
}
