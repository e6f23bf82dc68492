use std::path::PathBuf;

use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] yf_core::ValidationError),

    #[error("command error: {0}")]
    Command(String),

    #[error("Error reading file: {}: {source}", path.display())]
    TickerFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Command(_) => 2,
            Self::TickerFile { .. } => 1,
            Self::Serialization(_) => 4,
        }
    }
}
