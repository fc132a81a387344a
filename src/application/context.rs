//! Application context - everything handlers may read, built once at startup

use chrono::{DateTime, Duration, Utc};

use crate::application::messaging::gates::GateChain;
use crate::domain::entities::{CommandRegistry, EventRegistry, SlashCommandRegistry};
use crate::infrastructure::config::Config;

/// Registries and configuration shared by every handler. Constructed after
/// loading finishes and never mutated afterwards.
pub struct AppContext {
    config: Config,
    commands: CommandRegistry,
    events: EventRegistry,
    slash_commands: SlashCommandRegistry,
    gates: GateChain,
    started_at: DateTime<Utc>,
}

impl AppContext {
    pub fn new(
        config: Config,
        commands: CommandRegistry,
        events: EventRegistry,
        slash_commands: SlashCommandRegistry,
    ) -> Self {
        let gates = GateChain::standard(config.developers.clone());
        Self {
            config,
            commands,
            events,
            slash_commands,
            gates,
            started_at: Utc::now(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    pub fn events(&self) -> &EventRegistry {
        &self.events
    }

    pub fn slash_commands(&self) -> &SlashCommandRegistry {
        &self.slash_commands
    }

    pub fn gates(&self) -> &GateChain {
        &self.gates
    }

    pub fn uptime(&self) -> Duration {
        Utc::now() - self.started_at
    }
}
