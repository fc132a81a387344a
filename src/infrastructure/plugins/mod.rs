//! Handler module loading
//!
//! Handler modules declare a `Registration` entry (their factory plus
//! `file!()`); the loader turns the registration table into registries.

pub mod loader;
pub mod manifest;

pub use loader::PluginLoader;
pub use manifest::{Factory, Registration, RegistrationTable};
