use std::collections::HashMap;
use std::sync::Arc;

use super::{InteractionContext, MessageContext};
use crate::application::context::AppContext;
use crate::domain::traits::EventHandler;

/// Gateway events forwarded to the event registry
#[derive(Debug)]
pub enum GatewayEvent {
    Ready { user_name: String, guild_count: usize },
    InteractionCreate(InteractionContext),
    MessageCreate(MessageContext),
}

impl GatewayEvent {
    /// Registry key of the event
    pub fn name(&self) -> &'static str {
        match self {
            GatewayEvent::Ready { .. } => "ready",
            GatewayEvent::InteractionCreate(_) => "interactionCreate",
            GatewayEvent::MessageCreate(_) => "messageCreate",
        }
    }
}

pub struct EventDescriptor {
    /// Declared name. The loader falls back to the module's file stem when empty.
    pub name: String,
    pub category: String,
    pub handler: Arc<dyn EventHandler>,
}

impl EventDescriptor {
    pub fn new(handler: impl EventHandler + 'static) -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            handler: Arc::new(handler),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl std::fmt::Debug for EventDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDescriptor")
            .field("name", &self.name)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

#[derive(Default)]
pub struct EventRegistry {
    events: HashMap<String, Arc<EventDescriptor>>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, event: EventDescriptor) -> Option<Arc<EventDescriptor>> {
        self.events.insert(event.name.clone(), Arc::new(event))
    }

    pub fn get(&self, name: &str) -> Option<&Arc<EventDescriptor>> {
        self.events.get(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.events.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Runs the handler registered for the event, if any. Handler errors are
    /// logged and never propagate to the gateway.
    pub async fn emit(&self, app: &AppContext, event: &GatewayEvent) {
        let Some(descriptor) = self.events.get(event.name()) else {
            tracing::debug!("No handler registered for event {}", event.name());
            return;
        };

        if let Err(e) = descriptor.handler.handle(app, event).await {
            tracing::error!(event = event.name(), "Event handler failed: {}", e);
        }
    }
}
