//! Cog trait definition

use crate::application::errors::CogError;
use async_trait::async_trait;

/// Core cog trait that all cogs must implement
///
/// Loading a cog makes its commands reachable through the dispatcher;
/// unloading removes them. Setup and teardown may perform I/O (a cog
/// establishing its own external client, for example).
#[async_trait]
pub trait Cog: Send + Sync {
    /// Unique identifier for the cog (no file extension, one per registry)
    fn name(&self) -> &str;

    /// Human-readable description
    fn description(&self) -> &str;

    /// Command names this cog serves while loaded
    fn commands(&self) -> Vec<&'static str>;

    /// Bind the cog into the running bot
    async fn setup(&self) -> Result<(), CogError> {
        Ok(())
    }

    /// Release resources when the cog is unloaded
    async fn teardown(&self) -> Result<(), CogError> {
        Ok(())
    }

    /// Handle one of this cog's commands
    async fn handle(&self, command: &str, args: &[String]) -> Result<String, CogError>;
}
