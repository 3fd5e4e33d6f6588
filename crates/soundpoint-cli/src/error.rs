use soundpoint_core::CheckpointError;
use thiserror::Error;

/// Errors surfaced by the CLI.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Checkpoint(#[from] CheckpointError),
    #[error("checkpoint build cancelled")]
    Cancelled,
    #[error("failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Checkpoint(e) => e.exit_code(),
            CliError::Cancelled | CliError::Output(_) => 2,
        }
    }
}
