use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackagingError {
    /// `mark_encountered` was given a simulator that is not registered.
    #[error("Unknown simulator: {0}")]
    NotFound(String),

    #[error("Failed to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read config file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML config {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Duplicate family token: {0}")]
    DuplicateFamily(String),

    #[error("Duplicate simulator: {0}")]
    DuplicateSimulator(String),

    #[error("Simulator {simulator} references unknown family {family}")]
    UnknownFamily { simulator: String, family: String },
}

pub type Result<T> = std::result::Result<T, PackagingError>;
