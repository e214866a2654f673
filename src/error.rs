//! Top-level error type returned from application start-up.
//!
//! Each concern keeps its own error enum; this one only wraps them so `?`
//! works across module boundaries.

pub use crate::api::ApiError;
pub use crate::config::ConfigError;
pub use crate::state::StateError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("idea API: {0}")]
    Api(#[from] ApiError),

    #[error("state: {0}")]
    State(#[from] StateError),

    #[error("terminal I/O: {0}")]
    Io(#[from] std::io::Error),

    /// A global logger was already installed
    #[error("logger: {0}")]
    Logger(String),

    /// The networking thread could not build its tokio runtime
    #[error("tokio runtime: {0}")]
    RuntimeCreation(String),
}

pub type AppResult<T> = Result<T, AppError>;
