//! Salarycast core: model types, feature encoding, and artifact handling
//!
//! Provides the shared layer between the offline trainer and the
//! prediction service: the fitted regression artifact, the one-hot
//! feature encoding it embeds, and canonical serialization so that a
//! given model always serializes to the same bytes and fitted
//! parameters carry a stable digest.
//!
//! Modules:
//! - `types`: canonical column names and the prediction input record
//! - `features`: fitted category maps and the feature schema
//! - `model`: the regression artifact, prediction, and persistence
//! - `serialization`: canonical JSON helpers for hashing and storage
//! - `errors`: shared error type

pub mod errors;
pub mod features;
pub mod model;
pub mod serialization;
pub mod types;

pub use errors::CoreError;
pub use features::{CategoryMap, ColumnKind, FeatureSchema, SchemaColumn};
pub use model::{ModelMetadata, Prediction, RegressionModel};
pub use serialization::{canonical_json_string, write_canonical_json};
pub use types::{
    EmployeeProfile, COL_AGE, COL_EDUCATION, COL_EXPERIENCE, COL_GENDER, COL_SALARY,
    KNOWN_COLUMNS,
};

/// Crate version string for artifact metadata and health reports
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
