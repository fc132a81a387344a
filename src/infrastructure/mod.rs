//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Plugins: Handler module registration and loading
//! - Adapters: Discord gateway, responders and REST registration
//! - Logging: Subscriber setup and the panic observer

pub mod adapters;
pub mod config;
pub mod logging;
pub mod plugins;
