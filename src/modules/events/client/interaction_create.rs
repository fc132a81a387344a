use async_trait::async_trait;

use crate::application::context::AppContext;
use crate::application::errors::BotError;
use crate::application::messaging::InteractionDispatcher;
use crate::domain::entities::{EventDescriptor, GatewayEvent};
use crate::domain::traits::EventHandler;
use crate::infrastructure::plugins::Registration;

pub const REGISTRATION: Registration<EventDescriptor> = Registration::new(file!(), build);

fn build() -> Result<EventDescriptor, BotError> {
    Ok(EventDescriptor::new(InteractionCreate).with_name("interactionCreate"))
}

struct InteractionCreate;

#[async_trait]
impl EventHandler for InteractionCreate {
    async fn handle(&self, app: &AppContext, event: &GatewayEvent) -> Result<(), BotError> {
        if let GatewayEvent::InteractionCreate(ctx) = event {
            InteractionDispatcher::new().dispatch(app, ctx).await;
        }
        Ok(())
    }
}
