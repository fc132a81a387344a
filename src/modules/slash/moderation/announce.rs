use async_trait::async_trait;
use serenity::all::Permissions;

use crate::application::context::AppContext;
use crate::application::errors::{BotError, CommandError};
use crate::domain::entities::{
    CommandOptionSpec, CommandOptions, InteractionContext, OptionKind, Reply, Requirements,
    SlashCommandDescriptor,
};
use crate::domain::traits::SlashCommandHandler;
use crate::infrastructure::plugins::Registration;

pub const REGISTRATION: Registration<SlashCommandDescriptor> = Registration::new(file!(), build);

fn build() -> Result<SlashCommandDescriptor, BotError> {
    Ok(SlashCommandDescriptor::new("announce", Announce)
        .with_description("Post an announcement in this channel")
        .with_option(CommandOptionSpec::new(OptionKind::String, "message", "Announcement text").required())
        .with_requirements(
            Requirements::new()
                .guild_only()
                .user_permissions(Permissions::MANAGE_MESSAGES)
                .client_permissions(Permissions::SEND_MESSAGES),
        ))
}

struct Announce;

#[async_trait]
impl SlashCommandHandler for Announce {
    async fn execute(
        &self,
        _app: &AppContext,
        ctx: &InteractionContext,
        options: &CommandOptions,
    ) -> Result<(), BotError> {
        let message = options
            .get_str("message")
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .ok_or_else(|| CommandError::InvalidArgs("the announcement is empty".to_string()))?;

        tracing::info!(user = %ctx.invoker.user_id, channel = %ctx.invoker.channel_id, "Announcement posted");
        ctx.reply(Reply::public(format!("**Announcement:** {}", message))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_blocks_direct_messages() {
        let descriptor = build().unwrap();
        let payload = descriptor.payload();
        assert_eq!(payload.dm_permission, Some(false));
        assert_eq!(payload.options.len(), 1);
        assert!(descriptor.requirements.guild_only);
    }
}
