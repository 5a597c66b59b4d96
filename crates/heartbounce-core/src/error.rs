use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("speed level {0} is outside 1..=10")]
    InvalidSpeedLevel(u8),
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML config: {0}")]
    ConfigToml(#[from] toml::de::Error),
    #[error("invalid JSON config: {0}")]
    ConfigJson(#[from] serde_json::Error),
    #[error("unsupported config format {0:?} (expected .toml or .json)")]
    UnsupportedConfigFormat(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
