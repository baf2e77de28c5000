//! Message handling - parsing and owner-command dispatch

pub mod dispatcher;
pub mod parser;

pub use dispatcher::CommandDispatcher;
pub use parser::MessageParser;
