use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NumerologyError {
    #[error("invalid date `{input}`: {reason}")]
    InvalidDate { input: String, reason: String },

    #[error("target year {0} is outside 1..=9999")]
    TargetYearOutOfRange(u32),

    #[error("name `{0}` has no letters with a numerology value")]
    EmptyName(String),

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("failed to write config {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, NumerologyError>;
