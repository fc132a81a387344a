//! Recording fakes shared by unit tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::application::context::AppContext;
use crate::application::errors::BotError;
use crate::domain::entities::{
    CommandOptions, CommandRegistry, EventRegistry, InteractionContext, Reply, SlashCommandRegistry,
};
use crate::domain::traits::{Responder, SlashCommandHandler};
use crate::infrastructure::config::Config;

#[derive(Default)]
pub struct RecordingResponder {
    replies: Mutex<Vec<Reply>>,
}

impl RecordingResponder {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn replies(&self) -> Vec<Reply> {
        self.replies.lock().unwrap().clone()
    }
}

#[async_trait]
impl Responder for RecordingResponder {
    async fn reply(&self, reply: Reply) -> Result<(), BotError> {
        self.replies.lock().unwrap().push(reply);
        Ok(())
    }
}

/// Slash handler that counts calls and optionally fails
#[derive(Default)]
pub struct CountingHandler {
    calls: Arc<AtomicUsize>,
    fail_with: Option<String>,
}

impl CountingHandler {
    pub fn new() -> (Self, Arc<AtomicUsize>) {
        let handler = Self::default();
        let calls = Arc::clone(&handler.calls);
        (handler, calls)
    }

    pub fn failing(message: &str) -> (Self, Arc<AtomicUsize>) {
        let (mut handler, calls) = Self::new();
        handler.fail_with = Some(message.to_string());
        (handler, calls)
    }
}

#[async_trait]
impl SlashCommandHandler for CountingHandler {
    async fn execute(
        &self,
        _app: &AppContext,
        _ctx: &InteractionContext,
        _options: &CommandOptions,
    ) -> Result<(), BotError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail_with {
            Some(msg) => Err(BotError::Internal(msg.clone())),
            None => Ok(()),
        }
    }
}

pub fn config_with_developers(developers: &[&str]) -> Config {
    let mut config = Config::default();
    config.developers = developers.iter().map(|d| d.to_string()).collect();
    config
}

pub fn app_with_slash(slash_commands: SlashCommandRegistry) -> AppContext {
    AppContext::new(
        config_with_developers(&["42"]),
        CommandRegistry::new(),
        EventRegistry::new(),
        slash_commands,
    )
}
