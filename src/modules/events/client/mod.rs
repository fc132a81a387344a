pub mod interaction_create;
pub mod message_create;
pub mod ready;
