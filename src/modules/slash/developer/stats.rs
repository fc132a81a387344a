use async_trait::async_trait;

use crate::application::context::AppContext;
use crate::application::errors::BotError;
use crate::domain::entities::{CommandOptions, InteractionContext, Reply, Requirements, SlashCommandDescriptor};
use crate::domain::traits::SlashCommandHandler;
use crate::infrastructure::plugins::Registration;

pub const REGISTRATION: Registration<SlashCommandDescriptor> = Registration::new(file!(), build);

fn build() -> Result<SlashCommandDescriptor, BotError> {
    Ok(SlashCommandDescriptor::new("stats", Stats)
        .with_description("Show runtime statistics")
        .with_requirements(Requirements::new().developer_only()))
}

struct Stats;

#[async_trait]
impl SlashCommandHandler for Stats {
    async fn execute(
        &self,
        app: &AppContext,
        ctx: &InteractionContext,
        _options: &CommandOptions,
    ) -> Result<(), BotError> {
        ctx.reply(Reply::ephemeral(report(app))).await
    }
}

fn report(app: &AppContext) -> String {
    let uptime = app.uptime();
    format!(
        "Uptime: {}h {}m {}s\nPrefix commands: {}\nSlash commands: {}\nEvents: {}",
        uptime.num_hours(),
        uptime.num_minutes() % 60,
        uptime.num_seconds() % 60,
        app.commands().len(),
        app.slash_commands().len(),
        app.events().len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::app_with_slash;
    use crate::domain::entities::SlashCommandRegistry;

    #[test]
    fn test_report_counts_registries() {
        let mut slash = SlashCommandRegistry::new();
        slash.register(build().unwrap());
        let text = report(&app_with_slash(slash));

        assert!(text.starts_with("Uptime: 0h 0m"));
        assert!(text.contains("Slash commands: 1"));
        assert!(text.contains("Prefix commands: 0"));
    }
}
