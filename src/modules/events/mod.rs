//! Gateway event handlers

pub mod client;

use crate::domain::entities::EventDescriptor;
use crate::infrastructure::plugins::Registration;

pub fn registrations() -> Vec<Registration<EventDescriptor>> {
    vec![
        client::ready::REGISTRATION,
        client::interaction_create::REGISTRATION,
        client::message_create::REGISTRATION,
    ]
}
