//! cogbot - a chat bot whose command modules ("cogs") are loaded,
//! unloaded and reloaded at runtime by owner-only commands

pub mod application;
pub mod cogs;
pub mod domain;
pub mod infrastructure;
