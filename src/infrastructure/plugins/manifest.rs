//! Registration entries - one per handler module

use std::path::Path;

use crate::application::errors::BotError;
use crate::domain::entities::{CommandDescriptor, EventDescriptor, SlashCommandDescriptor};

/// Builds a module's descriptor. An `Err` is treated like a module that
/// failed to import.
pub type Factory<T> = fn() -> Result<T, BotError>;

/// A handler module's entry in the registration table. Modules declare it
/// themselves with `Registration::new(file!(), factory)` so that the
/// category and file name come from where the module lives.
pub struct Registration<T> {
    source: &'static str,
    factory: Factory<T>,
}

impl<T> Registration<T> {
    pub const fn new(source: &'static str, factory: Factory<T>) -> Self {
        Self { source, factory }
    }

    pub fn factory(&self) -> Factory<T> {
        self.factory
    }

    /// Name of the directory containing the module
    pub fn category(&self) -> &'static str {
        Path::new(self.source)
            .parent()
            .and_then(Path::file_name)
            .and_then(|name| name.to_str())
            .unwrap_or("uncategorized")
    }

    /// File name without extension
    pub fn file_stem(&self) -> &'static str {
        Path::new(self.source)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(self.source)
    }

    /// File name as shown in load logs
    pub fn file_name(&self) -> &'static str {
        Path::new(self.source)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(self.source)
    }
}

/// Every handler module the bot knows about, grouped by kind
#[derive(Default)]
pub struct RegistrationTable {
    pub commands: Vec<Registration<CommandDescriptor>>,
    pub events: Vec<Registration<EventDescriptor>>,
    pub slash_commands: Vec<Registration<SlashCommandDescriptor>>,
}
