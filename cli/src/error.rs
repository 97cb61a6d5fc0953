use stream_pretty_core::{ConfigError, PrettyError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("cannot open input {path}: {source}")]
    Input {
        path: String,
        source: std::io::Error,
    },
    #[error("{0}")]
    Render(#[from] PrettyError),
    #[error("logging setup failed: {0}")]
    Logging(#[from] anyhow::Error),
}

impl CliError {
    /// 11: config error, 20: input/output failure, 50: internal.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) => 11,
            CliError::Input { .. } => 20,
            CliError::Render(PrettyError::Io(_)) => 20,
            CliError::Logging(_) => 50,
        }
    }

    /// Downstream closed the pipe (e.g. `| head`); not worth reporting.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(
            self,
            CliError::Render(PrettyError::Io(e)) if e.kind() == std::io::ErrorKind::BrokenPipe
        )
    }
}
