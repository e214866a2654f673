//! Errors raised while locating, reading or writing `config.yml`.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `save` was called before `load` picked a location
    #[error("config.yml location unknown, load the configuration first")]
    FilePathNotSet,

    #[error("cannot locate the home directory for ~/.config/swj-tui")]
    HomeDirectoryNotFound,

    #[error("cannot read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot create directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot encode settings as YAML: {0}")]
    Encode(String),

    #[error("config.yml is not valid: {0}")]
    Malformed(String),

    /// Accepts off, error, warn, info, debug and trace
    #[error("log_level '{0}' is not a log level")]
    InvalidLogLevel(String),
}
