use thiserror::Error;

/// Errors returned by the deterministic trainer.
#[derive(Debug, Error)]
pub enum TrainerError {
    #[error("dataset error: {0}")]
    Dataset(String),

    #[error("fit error: {0}")]
    Fit(String),

    #[error("core error: {0}")]
    Core(#[from] salarycast_core::CoreError),
}
