use std::io;

use thiserror::Error;

/// Library-wide error type for guacgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// YAML rendering failure.
    #[error("Failed to render docker-compose.yml: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
