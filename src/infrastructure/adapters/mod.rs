//! Platform adapters implementing the Bot trait

pub mod console;

pub use console::ConsoleAdapter;
