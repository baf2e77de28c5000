//! Process uptime cog

use super::trait_def::Cog;
use crate::application::errors::CogError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub struct UptimeCog {
    started: DateTime<Utc>,
}

impl UptimeCog {
    pub fn new() -> Self {
        Self {
            started: Utc::now(),
        }
    }
}

impl Default for UptimeCog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Cog for UptimeCog {
    fn name(&self) -> &str {
        "uptime"
    }

    fn description(&self) -> &str {
        "Reports how long the process has been running"
    }

    fn commands(&self) -> Vec<&'static str> {
        vec!["uptime"]
    }

    async fn handle(&self, _command: &str, _args: &[String]) -> Result<String, CogError> {
        let elapsed = Utc::now().signed_duration_since(self.started);
        let secs = elapsed.num_seconds().max(0);
        Ok(format!(
            "up {}h {}m {}s (since {})",
            secs / 3600,
            (secs % 3600) / 60,
            secs % 60,
            self.started.format("%Y-%m-%d %H:%M:%S UTC")
        ))
    }
}
