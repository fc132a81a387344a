use std::collections::HashMap;
use std::sync::Arc;

use super::Requirements;
use crate::domain::traits::CommandHandler;

/// Represents a prefix (text) command
pub struct CommandDescriptor {
    pub name: String,
    pub description: String,
    pub aliases: Vec<String>,
    /// Directory the declaring module lives in; set by the loader
    pub category: String,
    pub requirements: Requirements,
    pub handler: Arc<dyn CommandHandler>,
}

impl CommandDescriptor {
    pub fn new(name: impl Into<String>, handler: impl CommandHandler + 'static) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            aliases: Vec::new(),
            category: String::new(),
            requirements: Requirements::default(),
            handler: Arc::new(handler),
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_requirements(mut self, requirements: Requirements) -> Self {
        self.requirements = requirements;
        self
    }
}

impl std::fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("aliases", &self.aliases)
            .field("category", &self.category)
            .field("requirements", &self.requirements)
            .finish_non_exhaustive()
    }
}

/// Command registry keyed by lower-cased name, with an alias index that
/// points back at the same descriptor.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Arc<CommandDescriptor>>,
    aliases: HashMap<String, Arc<CommandDescriptor>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a command and its aliases. Returns the descriptor previously
    /// registered under the same name, if any; its aliases are dropped.
    pub fn register(&mut self, command: CommandDescriptor) -> Option<Arc<CommandDescriptor>> {
        let command = Arc::new(command);
        let previous = self
            .commands
            .insert(command.name.to_lowercase(), Arc::clone(&command));

        if let Some(previous) = &previous {
            self.aliases.retain(|_, target| !Arc::ptr_eq(target, previous));
        }
        for alias in &command.aliases {
            self.aliases.insert(alias.to_lowercase(), Arc::clone(&command));
        }
        previous
    }

    /// Lookup by primary name only
    pub fn get(&self, name: &str) -> Option<&Arc<CommandDescriptor>> {
        self.commands.get(&name.to_lowercase())
    }

    /// Lookup by primary name, then by alias
    pub fn find(&self, input: &str) -> Option<&Arc<CommandDescriptor>> {
        let key = input.to_lowercase();
        self.commands.get(&key).or_else(|| self.aliases.get(&key))
    }

    pub fn all(&self) -> impl Iterator<Item = &Arc<CommandDescriptor>> {
        self.commands.values()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }
}
