//! Prefix commands

pub mod utility;

use crate::domain::entities::CommandDescriptor;
use crate::infrastructure::plugins::Registration;

pub fn registrations() -> Vec<Registration<CommandDescriptor>> {
    vec![utility::ping::REGISTRATION, utility::help::REGISTRATION]
}
