use std::path::PathBuf;

use planrun_fetch::FetchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("failed to read plan {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Failure of a single directive. Any variant aborts the run.
#[derive(Debug, Error)]
pub enum StepError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extract(#[from] planrun_archive::Error),

    #[error(transparent)]
    Validate(#[from] planrun_verify::Error),

    #[error(transparent)]
    Script(#[from] planrun_script::Error),

    #[error("extraction task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error(transparent)]
    Figment(#[from] figment::Error),
}
