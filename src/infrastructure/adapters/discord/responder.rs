//! Responders that answer through serenity's HTTP client

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serenity::all::{
    CacheHttp, ChannelId, CommandInteraction, ComponentInteraction, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, Http, ModalInteraction,
};

use crate::application::errors::BotError;
use crate::domain::entities::Reply;
use crate::domain::traits::Responder;

/// Interaction types that accept a message response
pub enum InteractionTarget {
    Command(CommandInteraction),
    Component(ComponentInteraction),
    Modal(ModalInteraction),
}

impl InteractionTarget {
    async fn respond(&self, http: impl CacheHttp, response: CreateInteractionResponse) -> serenity::Result<()> {
        match self {
            InteractionTarget::Command(i) => i.create_response(http, response).await,
            InteractionTarget::Component(i) => i.create_response(http, response).await,
            InteractionTarget::Modal(i) => i.create_response(http, response).await,
        }
    }

    async fn follow_up(&self, http: impl CacheHttp, followup: CreateInteractionResponseFollowup) -> serenity::Result<()> {
        match self {
            InteractionTarget::Command(i) => i.create_followup(http, followup).await.map(|_| ()),
            InteractionTarget::Component(i) => i.create_followup(http, followup).await.map(|_| ()),
            InteractionTarget::Modal(i) => i.create_followup(http, followup).await.map(|_| ()),
        }
    }
}

/// Answers an interaction. The first reply is the interaction response;
/// later replies are sent as follow-up messages.
pub struct InteractionResponder {
    http: Arc<Http>,
    target: InteractionTarget,
    replied: AtomicBool,
}

impl InteractionResponder {
    pub fn new(http: Arc<Http>, target: InteractionTarget) -> Self {
        Self {
            http,
            target,
            replied: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl Responder for InteractionResponder {
    async fn reply(&self, reply: Reply) -> Result<(), BotError> {
        let message = CreateInteractionResponseMessage::new()
            .content(reply.content.clone())
            .ephemeral(reply.ephemeral);
        let followup = CreateInteractionResponseFollowup::new()
            .content(reply.content)
            .ephemeral(reply.ephemeral);

        deliver(
            &self.replied,
            self.target.respond(&self.http, CreateInteractionResponse::Message(message)),
            self.target.follow_up(&self.http, followup),
        )
        .await
        .map_err(|e| BotError::Network(e.to_string()))
    }
}

/// Awaits `respond` until an initial response has gone through, `follow_up`
/// afterwards. A failed initial response leaves the interaction unacknowledged.
async fn deliver<R, F>(replied: &AtomicBool, respond: R, follow_up: F) -> serenity::Result<()>
where
    R: Future<Output = serenity::Result<()>>,
    F: Future<Output = serenity::Result<()>>,
{
    if replied.load(Ordering::SeqCst) {
        return follow_up.await;
    }
    respond.await?;
    replied.store(true, Ordering::SeqCst);
    Ok(())
}

/// Posts into a text channel; used for prefix commands
pub struct ChannelResponder {
    http: Arc<Http>,
    channel_id: ChannelId,
}

impl ChannelResponder {
    pub fn new(http: Arc<Http>, channel_id: ChannelId) -> Self {
        Self { http, channel_id }
    }
}

#[async_trait]
impl Responder for ChannelResponder {
    async fn reply(&self, reply: Reply) -> Result<(), BotError> {
        self.channel_id
            .say(&self.http, reply.content)
            .await
            .map(|_| ())
            .map_err(|e| BotError::Network(e.to_string()))
    }
}
