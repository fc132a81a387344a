//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Context: the shared, read-only application context
//! - Services: prefix command handling
//! - Errors: Domain-specific errors
//! - Messaging: gate chain, interaction dispatching, message parsing

pub mod context;
pub mod errors;
pub mod messaging;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;
