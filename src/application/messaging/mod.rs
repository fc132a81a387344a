//! Message handling - Gate chain, interaction dispatch, prefix parsing

pub mod dispatcher;
pub mod gates;
pub mod parser;

pub use dispatcher::InteractionDispatcher;
pub use gates::{Gate, GateChain, GateError, GateInput};
pub use parser::{MessageParser, ParsedCommand};
