use async_trait::async_trait;

use crate::application::context::AppContext;
use crate::application::errors::BotError;
use crate::application::services::CommandService;
use crate::domain::entities::{EventDescriptor, GatewayEvent};
use crate::domain::traits::EventHandler;
use crate::infrastructure::plugins::Registration;

pub const REGISTRATION: Registration<EventDescriptor> = Registration::new(file!(), build);

fn build() -> Result<EventDescriptor, BotError> {
    Ok(EventDescriptor::new(MessageCreate).with_name("messageCreate"))
}

struct MessageCreate;

#[async_trait]
impl EventHandler for MessageCreate {
    async fn handle(&self, app: &AppContext, event: &GatewayEvent) -> Result<(), BotError> {
        if let GatewayEvent::MessageCreate(ctx) = event {
            CommandService::for_app(app).handle(app, ctx).await;
        }
        Ok(())
    }
}
