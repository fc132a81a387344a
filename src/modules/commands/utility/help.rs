use async_trait::async_trait;

use crate::application::context::AppContext;
use crate::application::errors::{BotError, CommandError};
use crate::domain::entities::{CommandDescriptor, CommandRegistry, MessageContext, Reply};
use crate::domain::traits::CommandHandler;
use crate::infrastructure::plugins::Registration;

pub const REGISTRATION: Registration<CommandDescriptor> = Registration::new(file!(), build);

fn build() -> Result<CommandDescriptor, BotError> {
    Ok(CommandDescriptor::new("help", Help)
        .with_description("List commands, or show details for one")
        .with_aliases(["h", "commands"]))
}

struct Help;

#[async_trait]
impl CommandHandler for Help {
    async fn execute(&self, app: &AppContext, ctx: &MessageContext, args: &[String]) -> Result<(), BotError> {
        let prefix = &app.config().bot.prefix;
        let text = match args.first() {
            Some(name) => describe(app.commands(), prefix, name)?,
            None => overview(app.commands(), prefix),
        };
        ctx.reply(Reply::public(text)).await
    }
}

/// One line per category, commands sorted by name
fn overview(commands: &CommandRegistry, prefix: &str) -> String {
    let mut listed: Vec<(&str, &str)> = commands
        .all()
        .map(|c| (c.category.as_str(), c.name.as_str()))
        .collect();
    listed.sort_unstable();

    let mut lines = vec!["Available commands:".to_string()];
    let mut current: Option<&str> = None;
    for (category, name) in listed {
        if current != Some(category) {
            lines.push(format!("**{}**:", category));
            current = Some(category);
        }
        if let Some(line) = lines.last_mut() {
            line.push_str(&format!(" `{}{}`", prefix, name));
        }
    }
    lines.push(format!("Use `{}help <command>` for details.", prefix));
    lines.join("\n")
}

fn describe(commands: &CommandRegistry, prefix: &str, name: &str) -> Result<String, BotError> {
    let command = commands
        .find(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;

    let mut text = format!("**{}{}**: {}", prefix, command.name, command.description);
    if !command.aliases.is_empty() {
        text.push_str(&format!("\nAliases: {}", command.aliases.join(", ")));
    }
    Ok(text)
}
