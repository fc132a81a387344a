use crate::application::context::AppContext;
use crate::application::errors::BotError;
use crate::application::messaging::gates::{GateError, GateInput};
use crate::application::messaging::MessageParser;
use crate::domain::entities::{CommandDescriptor, MessageContext, Reply};

/// Service for parsing and executing prefix commands
pub struct CommandService {
    parser: MessageParser,
}

impl CommandService {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            parser: MessageParser::new(prefix),
        }
    }

    pub fn for_app(app: &AppContext) -> Self {
        Self::new(app.config().bot.prefix.clone())
    }

    /// Handles one message. Returns `true` when a registered command was
    /// matched, whether or not it ran successfully.
    pub async fn handle(&self, app: &AppContext, ctx: &MessageContext) -> bool {
        if ctx.author_is_bot {
            return false;
        }

        let Some(parsed) = self.parser.parse(&ctx.content) else {
            return false;
        };

        let Some(command) = app.commands().find(&parsed.name) else {
            tracing::debug!("Unknown command: {}", parsed.name);
            return false;
        };

        if let Err(e) = self.run(app, ctx, command, &parsed.args).await {
            tracing::error!(command = %parsed.name, "An error occurred while processing a command: {}", e);
            let reply = Reply::public(format!("An error has occurred while processing a command: {}", e));
            if let Err(e) = ctx.reply(reply).await {
                tracing::warn!(command = %parsed.name, "Failed to send error reply: {}", e);
            }
        }
        true
    }

    async fn run(
        &self,
        app: &AppContext,
        ctx: &MessageContext,
        command: &CommandDescriptor,
        args: &[String],
    ) -> Result<(), BotError> {
        let input = GateInput {
            command_name: &command.name,
            requirements: &command.requirements,
            invoker: &ctx.invoker,
        };
        match app.gates().check(&input) {
            Ok(()) => {}
            Err(GateError::Rejected(msg)) => return ctx.reply(Reply::public(msg)).await,
            Err(GateError::Unresolvable(e)) => return Err(e.into()),
        }

        command.handler.execute(app, ctx, args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use crate::application::testing::{config_with_developers, RecordingResponder};
    use crate::domain::entities::{
        CommandRegistry, EventRegistry, Invoker, Requirements, SlashCommandRegistry,
    };
    use crate::domain::traits::CommandHandler;

    #[derive(Default)]
    struct RecordArgs {
        seen: Arc<Mutex<Vec<Vec<String>>>>,
    }

    #[async_trait]
    impl CommandHandler for RecordArgs {
        async fn execute(
            &self,
            _app: &AppContext,
            _ctx: &MessageContext,
            args: &[String],
        ) -> Result<(), BotError> {
            self.seen.lock().unwrap().push(args.to_vec());
            Ok(())
        }
    }

    fn app(command: CommandDescriptor) -> AppContext {
        let mut commands = CommandRegistry::new();
        commands.register(command);
        AppContext::new(
            config_with_developers(&["42"]),
            commands,
            EventRegistry::new(),
            SlashCommandRegistry::new(),
        )
    }

    fn message(content: &str, responder: &Arc<RecordingResponder>) -> MessageContext {
        MessageContext::new("m1", Invoker::new("1", "c"), content, responder.clone())
    }

    #[tokio::test]
    async fn test_alias_dispatches_with_args() {
        let handler = RecordArgs::default();
        let seen = Arc::clone(&handler.seen);
        let app = app(CommandDescriptor::new("ping", handler)
            .with_description("pong")
            .with_aliases(["p"]));
        let responder = RecordingResponder::new();

        let handled = CommandService::for_app(&app)
            .handle(&app, &message("!p a b", &responder))
            .await;

        assert!(handled);
        assert_eq!(*seen.lock().unwrap(), vec![vec!["a".to_string(), "b".to_string()]]);
        assert!(responder.replies().is_empty());
    }

    #[tokio::test]
    async fn test_ignores_bots_and_unknown_commands() {
        let handler = RecordArgs::default();
        let seen = Arc::clone(&handler.seen);
        let app = app(CommandDescriptor::new("ping", handler).with_description("pong"));
        let responder = RecordingResponder::new();
        let service = CommandService::for_app(&app);

        assert!(!service.handle(&app, &message("!ping", &responder).from_bot()).await);
        assert!(!service.handle(&app, &message("!pong", &responder)).await);
        assert!(!service.handle(&app, &message("ping", &responder)).await);
        assert!(seen.lock().unwrap().is_empty());
        assert!(responder.replies().is_empty());
    }

    #[tokio::test]
    async fn test_gates_apply_to_prefix_commands() {
        let handler = RecordArgs::default();
        let seen = Arc::clone(&handler.seen);
        let app = app(CommandDescriptor::new("shutdown", handler)
            .with_description("stop")
            .with_requirements(Requirements::new().developer_only()));
        let responder = RecordingResponder::new();

        CommandService::for_app(&app)
            .handle(&app, &message("!shutdown", &responder))
            .await;

        assert!(seen.lock().unwrap().is_empty());
        assert_eq!(
            responder.replies(),
            vec![Reply::public("shutdown is a developer only command")]
        );
    }
}
