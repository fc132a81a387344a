use std::collections::HashMap;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use super::Requirements;
use crate::domain::traits::SlashCommandHandler;

/// Discord application command type for chat input (slash) commands
const CHAT_INPUT: u8 = 1;

/// Value type of a slash command option, serialized as Discord's numeric id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    String,
    Integer,
    Boolean,
    User,
    Channel,
    Role,
    Number,
}

impl OptionKind {
    pub fn code(self) -> u8 {
        match self {
            OptionKind::String => 3,
            OptionKind::Integer => 4,
            OptionKind::Boolean => 5,
            OptionKind::User => 6,
            OptionKind::Channel => 7,
            OptionKind::Role => 8,
            OptionKind::Number => 10,
        }
    }
}

impl Serialize for OptionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// Declared option of a slash command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandOptionSpec {
    #[serde(rename = "type")]
    pub kind: OptionKind,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
}

impl CommandOptionSpec {
    pub fn new(kind: OptionKind, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            description: description.into(),
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Body element of the bulk command registration call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationPayload {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOptionSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dm_permission: Option<bool>,
}

/// A slash command and the metadata used to register it remotely
pub struct SlashCommandDescriptor {
    pub name: String,
    pub description: String,
    pub category: String,
    pub options: Vec<CommandOptionSpec>,
    pub requirements: Requirements,
    pub handler: Arc<dyn SlashCommandHandler>,
}

impl SlashCommandDescriptor {
    pub fn new(name: impl Into<String>, handler: impl SlashCommandHandler + 'static) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            category: String::new(),
            options: Vec::new(),
            requirements: Requirements::default(),
            handler: Arc::new(handler),
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    pub fn with_option(mut self, option: CommandOptionSpec) -> Self {
        self.options.push(option);
        self
    }

    pub fn with_requirements(mut self, requirements: Requirements) -> Self {
        self.requirements = requirements;
        self
    }

    pub fn payload(&self) -> RegistrationPayload {
        RegistrationPayload {
            name: self.name.clone(),
            description: self.description.clone(),
            kind: CHAT_INPUT,
            options: self.options.clone(),
            dm_permission: self.requirements.guild_only.then_some(false),
        }
    }
}

impl std::fmt::Debug for SlashCommandDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlashCommandDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("category", &self.category)
            .field("options", &self.options)
            .field("requirements", &self.requirements)
            .finish_non_exhaustive()
    }
}

#[derive(Default)]
pub struct SlashCommandRegistry {
    commands: HashMap<String, Arc<SlashCommandDescriptor>>,
}

impl SlashCommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the descriptor previously registered under the same name, if any
    pub fn register(&mut self, command: SlashCommandDescriptor) -> Option<Arc<SlashCommandDescriptor>> {
        self.commands.insert(command.name.clone(), Arc::new(command))
    }

    pub fn get(&self, name: &str) -> Option<&Arc<SlashCommandDescriptor>> {
        self.commands.get(name)
    }

    /// Registration batch, one entry per registered name, sorted by name
    pub fn payloads(&self) -> Vec<RegistrationPayload> {
        let mut payloads: Vec<_> = self.commands.values().map(|c| c.payload()).collect();
        payloads.sort_by(|a, b| a.name.cmp(&b.name));
        payloads
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
