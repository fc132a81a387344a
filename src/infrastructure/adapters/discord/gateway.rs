//! Serenity gateway client and the event bridge into the event registry

use std::sync::Arc;

use async_trait::async_trait;
use serenity::all::{
    Client, CommandDataOption, CommandDataOptionValue, Context, EventHandler as SerenityEventHandler,
    GatewayIntents, Interaction, Message, Permissions, Ready,
};

use super::responder::{ChannelResponder, InteractionResponder, InteractionTarget};
use crate::application::context::AppContext;
use crate::application::errors::BotError;
use crate::domain::entities::{
    CommandOptions, GatewayEvent, InteractionContext, InteractionKind, Invoker, MessageContext,
    OptionValue,
};
use crate::domain::traits::Gateway;

/// Serenity event handler forwarding gateway events to the event registry
struct Handler {
    app: Arc<AppContext>,
}

#[async_trait]
impl SerenityEventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        let event = GatewayEvent::Ready {
            user_name: ready.user.name.clone(),
            guild_count: ready.guilds.len(),
        };
        self.app.events().emit(&self.app, &event).await;
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Some(context) = interaction_context(&ctx, interaction) else {
            return;
        };
        let event = GatewayEvent::InteractionCreate(context);
        self.app.events().emit(&self.app, &event).await;
    }

    async fn message(&self, ctx: Context, msg: Message) {
        let (member_permissions, bot_permissions) = message_permissions(&ctx, &msg);

        let mut invoker = Invoker::new(msg.author.id.to_string(), msg.channel_id.to_string());
        invoker.guild_id = msg.guild_id.map(|id| id.to_string());
        invoker.member_permissions = member_permissions;
        invoker.bot_permissions = bot_permissions;

        let responder = Arc::new(ChannelResponder::new(Arc::clone(&ctx.http), msg.channel_id));
        let mut context = MessageContext::new(msg.id.to_string(), invoker, msg.content.clone(), responder);
        if msg.author.bot {
            context = context.from_bot();
        }

        let event = GatewayEvent::MessageCreate(context);
        self.app.events().emit(&self.app, &event).await;
    }
}

/// Builds the dispatcher's view of an interaction. Returns `None` for
/// interactions that cannot carry a message response.
fn interaction_context(ctx: &Context, interaction: Interaction) -> Option<InteractionContext> {
    let http = Arc::clone(&ctx.http);

    match interaction {
        Interaction::Command(command) => {
            let mut invoker = Invoker::new(command.user.id.to_string(), command.channel_id.to_string());
            invoker.guild_id = command.guild_id.map(|id| id.to_string());
            // Discord resolves both sets for the interaction's channel
            invoker.member_permissions = command.member.as_ref().and_then(|m| m.permissions);
            invoker.bot_permissions = command.app_permissions;

            let name = command.data.name.clone();
            let options = command_options(&command.data.options);
            let responder = Arc::new(InteractionResponder::new(http, InteractionTarget::Command(command)));

            Some(InteractionContext::new(InteractionKind::Command, name, invoker, responder).with_options(options))
        }
        Interaction::Autocomplete(command) => {
            let mut invoker = Invoker::new(command.user.id.to_string(), command.channel_id.to_string());
            invoker.guild_id = command.guild_id.map(|id| id.to_string());

            let name = command.data.name.clone();
            let responder = Arc::new(InteractionResponder::new(http, InteractionTarget::Command(command)));

            Some(InteractionContext::new(InteractionKind::Autocomplete, name, invoker, responder))
        }
        Interaction::Component(component) => {
            let mut invoker = Invoker::new(component.user.id.to_string(), component.channel_id.to_string());
            invoker.guild_id = component.guild_id.map(|id| id.to_string());

            let name = component.data.custom_id.clone();
            let responder = Arc::new(InteractionResponder::new(http, InteractionTarget::Component(component)));

            Some(InteractionContext::new(InteractionKind::Component, name, invoker, responder))
        }
        Interaction::Modal(modal) => {
            let mut invoker = Invoker::new(modal.user.id.to_string(), modal.channel_id.to_string());
            invoker.guild_id = modal.guild_id.map(|id| id.to_string());

            let name = modal.data.custom_id.clone();
            let responder = Arc::new(InteractionResponder::new(http, InteractionTarget::Modal(modal)));

            Some(InteractionContext::new(InteractionKind::Modal, name, invoker, responder))
        }
        _ => None,
    }
}

fn command_options(options: &[CommandDataOption]) -> CommandOptions {
    let mut parsed = CommandOptions::new();
    for option in options {
        let value = match &option.value {
            CommandDataOptionValue::String(s) => OptionValue::String(s.clone()),
            CommandDataOptionValue::Integer(i) => OptionValue::Integer(*i),
            CommandDataOptionValue::Number(n) => OptionValue::Number(*n),
            CommandDataOptionValue::Boolean(b) => OptionValue::Boolean(*b),
            CommandDataOptionValue::User(id) => OptionValue::User(id.to_string()),
            CommandDataOptionValue::Channel(id) => OptionValue::Channel(id.to_string()),
            CommandDataOptionValue::Role(id) => OptionValue::Role(id.to_string()),
            _ => continue,
        };
        parsed.insert(option.name.clone(), value);
    }
    parsed
}

/// Resolves the author's and the bot's permissions in the message channel
/// from the cache. Both are `None` outside guilds or when not cached.
fn message_permissions(ctx: &Context, msg: &Message) -> (Option<Permissions>, Option<Permissions>) {
    let bot_id = ctx.cache.current_user().id;

    let Some(guild) = msg.guild(&ctx.cache) else {
        return (None, None);
    };
    let Some(channel) = guild.channels.get(&msg.channel_id) else {
        return (None, None);
    };

    let member = guild
        .members
        .get(&msg.author.id)
        .map(|m| guild.user_permissions_in(channel, m));
    let bot = guild
        .members
        .get(&bot_id)
        .map(|m| guild.user_permissions_in(channel, m));

    (member, bot)
}

/// Gateway login through serenity
pub struct DiscordGateway {
    token: String,
}

impl DiscordGateway {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }

    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS
            | GatewayIntents::GUILD_MEMBERS
            | GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT
    }
}

#[async_trait]
impl Gateway for DiscordGateway {
    async fn login(&mut self, app: Arc<AppContext>) -> Result<(), BotError> {
        let mut client = Client::builder(&self.token, Self::intents())
            .event_handler(Handler { app })
            .await
            .map_err(|e| BotError::Login(e.to_string()))?;

        tracing::info!("Logging in to Discord...");
        client
            .start()
            .await
            .map_err(|e| BotError::Login(e.to_string()))
    }
}
