use async_trait::async_trait;

use crate::application::context::AppContext;
use crate::application::errors::BotError;
use crate::domain::entities::{CommandDescriptor, MessageContext, Reply};
use crate::domain::traits::CommandHandler;
use crate::infrastructure::plugins::Registration;

pub const REGISTRATION: Registration<CommandDescriptor> = Registration::new(file!(), build);

fn build() -> Result<CommandDescriptor, BotError> {
    Ok(CommandDescriptor::new("ping", Ping)
        .with_description("Check that the bot is responding")
        .with_aliases(["p", "latency"]))
}

struct Ping;

#[async_trait]
impl CommandHandler for Ping {
    async fn execute(&self, _app: &AppContext, ctx: &MessageContext, _args: &[String]) -> Result<(), BotError> {
        ctx.reply(Reply::public("Pong!")).await
    }
}
