//! Cog system for cogbot
//!
//! A cog is a named, independently loadable/unloadable unit of
//! command-handling logic. The registry tracks which cogs are active;
//! the built-in catalog is the discovery mechanism.

pub mod catalog;
pub mod fetch;
pub mod ping;
pub mod registry;
pub mod trait_def;
pub mod uptime;

pub use catalog::builtin_cogs;
pub use registry::{CogRegistry, CogState, SharedRegistry};
pub use trait_def::Cog;
