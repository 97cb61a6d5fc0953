use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid tool input limit {value:?}: {reason}")]
    InvalidToolInputMax { value: String, reason: String },
}

/// Failures that end a render. Malformed input lines never produce one.
#[derive(Error, Debug)]
pub enum PrettyError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
