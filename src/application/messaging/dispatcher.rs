//! Interaction dispatcher - routes slash command interactions to handlers

use crate::application::context::AppContext;
use crate::application::errors::BotError;
use crate::domain::entities::{InteractionContext, Reply};
use super::gates::{GateError, GateInput};

/// Dispatches one interaction: lookup, gates, execution. Errors never
/// escape; they are logged and reported to the invoker.
#[derive(Debug, Default, Clone, Copy)]
pub struct InteractionDispatcher;

impl InteractionDispatcher {
    pub fn new() -> Self {
        Self
    }

    pub async fn dispatch(&self, app: &AppContext, ctx: &InteractionContext) {
        if !ctx.is_command() {
            return;
        }

        if let Err(e) = self.run(app, ctx).await {
            tracing::error!(
                command = %ctx.command_name,
                user = %ctx.invoker.user_id,
                "An error occurred while processing a slash command: {}",
                e
            );

            let reply = Reply::ephemeral(format!(
                "An error has occurred while processing a slash command: {}",
                e
            ));
            if let Err(e) = ctx.reply(reply).await {
                tracing::warn!(command = %ctx.command_name, "Failed to send error reply: {}", e);
            }
        }
    }

    async fn run(&self, app: &AppContext, ctx: &InteractionContext) -> Result<(), BotError> {
        let Some(command) = app.slash_commands().get(&ctx.command_name) else {
            return ctx
                .reply(Reply::ephemeral(format!("{} is not a valid command", ctx.command_name)))
                .await;
        };

        let input = GateInput {
            command_name: &ctx.command_name,
            requirements: &command.requirements,
            invoker: &ctx.invoker,
        };
        match app.gates().check(&input) {
            Ok(()) => {}
            Err(GateError::Rejected(msg)) => {
                tracing::debug!(command = %ctx.command_name, "Gate rejected: {}", msg);
                return ctx.reply(Reply::ephemeral(msg)).await;
            }
            Err(GateError::Unresolvable(e)) => return Err(e.into()),
        }

        tracing::debug!(command = %ctx.command_name, category = %command.category, "Executing slash command");
        command.handler.execute(app, ctx, &ctx.options).await
    }
}
