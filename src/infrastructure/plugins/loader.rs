//! Plugin loader - Builds the registries from the registration table

use std::panic::catch_unwind;

use super::manifest::{Registration, RegistrationTable};
use crate::application::errors::LoadError;
use crate::domain::entities::{CommandRegistry, EventRegistry, SlashCommandRegistry};
use crate::infrastructure::logging::panic_message;

/// Loads each kind of handler module. A module that fails to build or
/// validate is logged and skipped; it never aborts startup.
pub struct PluginLoader<'a> {
    table: &'a RegistrationTable,
}

impl<'a> PluginLoader<'a> {
    pub fn new(table: &'a RegistrationTable) -> Self {
        Self { table }
    }

    pub fn load_commands(&self) -> CommandRegistry {
        tracing::info!("Loading commands...");
        let mut registry = CommandRegistry::new();

        for entry in &self.table.commands {
            let result = instantiate(entry).and_then(|mut command| {
                require_fields(entry, &command.name, &command.description)?;
                command.category = entry.category().to_string();
                Ok(command)
            });

            match result {
                Ok(command) => {
                    let name = command.name.clone();
                    if registry.register(command).is_some() {
                        tracing::warn!("Command {} from {} replaced an earlier registration", name, entry.file_name());
                    }
                    tracing::info!("Loaded command: {}", name);
                }
                Err(e) => tracing::warn!("Couldn't load the command {}", e),
            }
        }

        registry
    }

    pub fn load_events(&self) -> EventRegistry {
        tracing::info!("Loading events...");
        let mut registry = EventRegistry::new();

        for entry in &self.table.events {
            let result = instantiate(entry).and_then(|mut event| {
                if event.name.trim().is_empty() {
                    event.name = entry.file_stem().to_string();
                } else if event.name.chars().any(char::is_whitespace) {
                    return Err(LoadError::Validation {
                        file: entry.file_name().to_string(),
                        reason: format!("event name {:?} should be a single word", event.name),
                    });
                }
                event.category = entry.category().to_string();
                Ok(event)
            });

            match result {
                Ok(event) => {
                    let name = event.name.clone();
                    if registry.register(event).is_some() {
                        tracing::warn!("Event {} from {} replaced an earlier registration", name, entry.file_name());
                    }
                    tracing::info!("Loaded event: {}", name);
                }
                Err(e) => tracing::warn!("Couldn't load the event {}", e),
            }
        }

        registry
    }

    pub fn load_slash_commands(&self) -> SlashCommandRegistry {
        tracing::info!("Loading slash commands...");
        let mut registry = SlashCommandRegistry::new();

        for entry in &self.table.slash_commands {
            let result = instantiate(entry).and_then(|mut command| {
                require_fields(entry, &command.name, &command.description)?;
                command.category = entry.category().to_string();
                Ok(command)
            });

            match result {
                Ok(command) => {
                    let name = command.name.clone();
                    if registry.register(command).is_some() {
                        tracing::warn!("Slash command {} from {} replaced an earlier registration", name, entry.file_name());
                    }
                    tracing::info!("Loaded slash command: {}", name);
                }
                Err(e) => tracing::warn!("Couldn't load the slash command {}", e),
            }
        }

        registry
    }
}

/// Runs the module's factory, turning both errors and panics into
/// `LoadError::Import`.
fn instantiate<T>(entry: &Registration<T>) -> Result<T, LoadError> {
    match catch_unwind(entry.factory()) {
        Ok(Ok(descriptor)) => Ok(descriptor),
        Ok(Err(e)) => Err(LoadError::Import {
            file: entry.file_name().to_string(),
            reason: e.to_string(),
        }),
        Err(payload) => Err(LoadError::Import {
            file: entry.file_name().to_string(),
            reason: format!("panicked: {}", panic_message(payload.as_ref())),
        }),
    }
}

fn require_fields<T>(entry: &Registration<T>, name: &str, description: &str) -> Result<(), LoadError> {
    if name.trim().is_empty() || description.trim().is_empty() {
        return Err(LoadError::Validation {
            file: entry.file_name().to_string(),
            reason: "Missing a name or description".to_string(),
        });
    }
    Ok(())
}
