//! Configuration management

use crate::application::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub bot: BotConfig,
    pub cogs: CogsConfig,
    pub adapters: AdaptersConfig,
    pub database: DatabaseConfig,
    pub shutdown: ShutdownConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BotConfig {
    pub name: String,
    pub prefix: String,
    /// The single identity allowed to issue lifecycle and process commands
    pub owner_id: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CogsConfig {
    /// Cogs loaded automatically at startup
    pub autoload: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct AdaptersConfig {
    pub console: Option<ConsoleConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConsoleConfig {
    pub enabled: bool,
    /// Invoker identity attached to console input
    pub user_id: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ShutdownConfig {
    /// Bound on waiting for in-flight cog work during stop/restart
    pub grace_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                name: "cogbot".to_string(),
                prefix: "!".to_string(),
                owner_id: String::new(),
            },
            cogs: CogsConfig {
                autoload: vec![
                    "ping".to_string(),
                    "uptime".to_string(),
                    "fetch".to_string(),
                ],
            },
            adapters: AdaptersConfig {
                console: Some(ConsoleConfig {
                    enabled: true,
                    user_id: "console".to_string(),
                }),
            },
            database: DatabaseConfig {
                path: PathBuf::from("cogbot.db"),
            },
            shutdown: ShutdownConfig { grace_seconds: 10 },
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.into())?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults with environment overrides, used when no config file exists
    pub fn load_env() -> Self {
        let mut config = Config::default();

        if let Ok(owner) = std::env::var("BOT_OWNER_ID") {
            config.bot.owner_id = owner;
        }
        if let Ok(prefix) = std::env::var("BOT_PREFIX") {
            config.bot.prefix = prefix;
        }

        config
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.bot.prefix.is_empty() {
            return Err(ConfigError::InvalidValue(
                "bot.prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
