//! Registered under its file name, `ready`

use async_trait::async_trait;

use crate::application::context::AppContext;
use crate::application::errors::BotError;
use crate::domain::entities::{EventDescriptor, GatewayEvent};
use crate::domain::traits::EventHandler;
use crate::infrastructure::plugins::Registration;

pub const REGISTRATION: Registration<EventDescriptor> = Registration::new(file!(), build);

fn build() -> Result<EventDescriptor, BotError> {
    Ok(EventDescriptor::new(Ready))
}

struct Ready;

#[async_trait]
impl EventHandler for Ready {
    async fn handle(&self, app: &AppContext, event: &GatewayEvent) -> Result<(), BotError> {
        if let GatewayEvent::Ready { user_name, guild_count } = event {
            tracing::info!(
                "Ready! Logged in as {} in {} guilds ({} slash commands, {} prefix commands)",
                user_name,
                guild_count,
                app.slash_commands().len(),
                app.commands().len()
            );
        }
        Ok(())
    }
}
