//! Slash commands, registered with Discord at startup

pub mod developer;
pub mod moderation;
pub mod utility;

use crate::domain::entities::SlashCommandDescriptor;
use crate::infrastructure::plugins::Registration;

pub fn registrations() -> Vec<Registration<SlashCommandDescriptor>> {
    vec![
        utility::ping::REGISTRATION,
        utility::echo::REGISTRATION,
        moderation::announce::REGISTRATION,
        developer::stats::REGISTRATION,
    ]
}
