use std::sync::Arc;

use serenity::all::Permissions;

use crate::application::errors::BotError;
use crate::domain::traits::Responder;

/// Kind of an incoming interaction. Only `Command` is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    Command,
    Autocomplete,
    Component,
    Modal,
}

/// Who invoked a command and where, with the permission sets resolved for
/// the invoking member and for the bot in that channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invoker {
    pub user_id: String,
    pub channel_id: String,
    /// `None` for direct messages
    pub guild_id: Option<String>,
    pub member_permissions: Option<Permissions>,
    pub bot_permissions: Option<Permissions>,
}

impl Invoker {
    pub fn new(user_id: impl Into<String>, channel_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            channel_id: channel_id.into(),
            ..Self::default()
        }
    }

    pub fn in_guild(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = Some(guild_id.into());
        self
    }

    pub fn with_member_permissions(mut self, permissions: Permissions) -> Self {
        self.member_permissions = Some(permissions);
        self
    }

    pub fn with_bot_permissions(mut self, permissions: Permissions) -> Self {
        self.bot_permissions = Some(permissions);
        self
    }
}

/// Outgoing reply. Ephemeral replies are only visible to the invoker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub content: String,
    pub ephemeral: bool,
}

impl Reply {
    pub fn public(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: false,
        }
    }

    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: true,
        }
    }
}

/// A parsed slash command option value
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    String(String),
    Integer(i64),
    Number(f64),
    Boolean(bool),
    User(String),
    Channel(String),
    Role(String),
}

/// Options supplied with a slash command, in the order Discord sent them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandOptions {
    values: Vec<(String, OptionValue)>,
}

impl CommandOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: OptionValue) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: OptionValue) {
        self.values.push((name.into(), value));
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(OptionValue::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.get(name) {
            Some(OptionValue::Boolean(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One incoming interaction. Lives for the duration of a single dispatch.
#[derive(Clone)]
pub struct InteractionContext {
    pub kind: InteractionKind,
    pub command_name: String,
    pub invoker: Invoker,
    pub options: CommandOptions,
    responder: Arc<dyn Responder>,
}

impl InteractionContext {
    pub fn new(
        kind: InteractionKind,
        command_name: impl Into<String>,
        invoker: Invoker,
        responder: Arc<dyn Responder>,
    ) -> Self {
        Self {
            kind,
            command_name: command_name.into(),
            invoker,
            options: CommandOptions::new(),
            responder,
        }
    }

    pub fn with_options(mut self, options: CommandOptions) -> Self {
        self.options = options;
        self
    }

    pub fn is_command(&self) -> bool {
        self.kind == InteractionKind::Command
    }

    pub async fn reply(&self, reply: Reply) -> Result<(), BotError> {
        self.responder.reply(reply).await
    }
}

impl std::fmt::Debug for InteractionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionContext")
            .field("kind", &self.kind)
            .field("command_name", &self.command_name)
            .field("invoker", &self.invoker)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
