//! Application layer errors

use thiserror::Error;

/// General bot errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Cog error: {0}")]
    Cog(#[from] CogError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Failures inside a cog's own code during bind/unbind or command handling
#[derive(Error, Debug)]
pub enum CogError {
    #[error("setup failed: {0}")]
    Setup(String),

    #[error("teardown failed: {0}")]
    Teardown(String),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("execution failed: {0}")]
    Execution(String),

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid value: {0}")]
    InvalidValue(String),
}
