use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExprEvolveError {
    #[error("Length mismatch: cannot cross individuals of length {left} and {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("Cannot select from an empty population")]
    EmptyPopulation,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config source error: {0}")]
    ConfigSource(#[from] config::ConfigError),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExprEvolveError>;
