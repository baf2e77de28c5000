//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Database: Command audit log
//! - Adapters: Platform integrations

pub mod adapters;
pub mod config;
pub mod database;
