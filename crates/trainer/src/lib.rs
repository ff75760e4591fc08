//! Salarycast trainer - deterministic offline regression fitting
//!
//! Loads the salary CSV, drops incomplete rows, fits the one-hot +
//! linear-regression pipeline in closed form, and emits the artifact
//! the prediction service loads. No randomness is involved anywhere,
//! so retraining on the same data reproduces the same estimator.

pub mod dataset;
pub mod errors;
pub mod ols;
pub mod trainer;

use salarycast_core::RegressionModel;
use std::path::Path;

pub use dataset::{ColumnStats, Dataset, SalaryRecord};
pub use errors::TrainerError;
pub use trainer::PipelineTrainer;

/// Train a model directly from a CSV file.
pub fn train_model_from_csv(path: &Path) -> Result<RegressionModel, TrainerError> {
    let dataset = Dataset::from_csv(path).map_err(|err| TrainerError::Dataset(err.to_string()))?;
    PipelineTrainer::new().fit(&dataset)
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
