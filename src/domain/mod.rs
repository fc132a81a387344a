//! Domain layer - Commands, events and the contracts around them
//!
//! This layer contains:
//! - Entities: Descriptors, registries, invocation contexts
//! - Traits: Handler bodies and platform abstractions (Responder, Registrar, Gateway)

pub mod entities;
pub mod traits;
