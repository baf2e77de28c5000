//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Errors: Domain-specific errors
//! - Services: Owner gate, cog lifecycle, process control
//! - Messaging: Message parsing and command dispatch

pub mod errors;
pub mod messaging;
pub mod services;
