use std::sync::Arc;

use async_trait::async_trait;

use crate::application::context::AppContext;
use crate::application::errors::BotError;
use crate::domain::entities::{RegistrationPayload, Reply};

/// Sends replies back to wherever an invocation came from
#[async_trait]
pub trait Responder: Send + Sync {
    async fn reply(&self, reply: Reply) -> Result<(), BotError>;
}

/// Submits the slash command batch to the platform. The call replaces the
/// whole remote command set for the application.
#[async_trait]
pub trait CommandRegistrar: Send + Sync {
    async fn register(&self, client_id: &str, batch: &[RegistrationPayload]) -> Result<(), BotError>;
}

/// Connection to the platform's gateway
#[async_trait]
pub trait Gateway: Send {
    /// Logs in and serves events until the connection ends
    async fn login(&mut self, app: Arc<AppContext>) -> Result<(), BotError>;
}
