pub mod echo;
pub mod ping;
