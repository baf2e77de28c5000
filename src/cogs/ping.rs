//! Liveness check cog

use super::trait_def::Cog;
use crate::application::errors::CogError;
use async_trait::async_trait;

pub struct PingCog;

impl PingCog {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PingCog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Cog for PingCog {
    fn name(&self) -> &str {
        "ping"
    }

    fn description(&self) -> &str {
        "Answers pings to confirm the bot is alive"
    }

    fn commands(&self) -> Vec<&'static str> {
        vec!["ping"]
    }

    async fn handle(&self, _command: &str, _args: &[String]) -> Result<String, CogError> {
        Ok("pong".to_string())
    }
}
