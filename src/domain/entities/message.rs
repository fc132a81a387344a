use std::sync::Arc;

use super::{Invoker, Reply};
use crate::application::errors::BotError;
use crate::domain::traits::Responder;

/// An incoming channel message that may carry a prefix command
#[derive(Clone)]
pub struct MessageContext {
    pub id: String,
    pub invoker: Invoker,
    pub content: String,
    pub author_is_bot: bool,
    responder: Arc<dyn Responder>,
}

impl MessageContext {
    pub fn new(
        id: impl Into<String>,
        invoker: Invoker,
        content: impl Into<String>,
        responder: Arc<dyn Responder>,
    ) -> Self {
        Self {
            id: id.into(),
            invoker,
            content: content.into(),
            author_is_bot: false,
            responder,
        }
    }

    pub fn from_bot(mut self) -> Self {
        self.author_is_bot = true;
        self
    }

    /// Replies in the message's channel. Channel messages cannot be
    /// ephemeral, so the flag is ignored by the platform adapter.
    pub async fn reply(&self, reply: Reply) -> Result<(), BotError> {
        self.responder.reply(reply).await
    }
}

impl std::fmt::Debug for MessageContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageContext")
            .field("id", &self.id)
            .field("invoker", &self.invoker)
            .field("content", &self.content)
            .field("author_is_bot", &self.author_is_bot)
            .finish_non_exhaustive()
    }
}
