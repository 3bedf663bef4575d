use thiserror::Error;

/// Errors that can occur while loading a [`crate::config::CanvasConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid thickness range {min}..={max}")]
    InvalidThicknessRange { min: f32, max: f32 },

    #[error("History limit must be at least 1")]
    InvalidHistoryLimit,
}

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;
