//! Pipeline fitting: one-hot encoding composed with linear regression
//!
//! Mirrors the serving-side expansion exactly: the schema fitted here is
//! persisted in the artifact and drives both training expansion and
//! request expansion, so the two can never disagree on column order.

use salarycast_core::{
    CategoryMap, FeatureSchema, ModelMetadata, RegressionModel, SchemaColumn, COL_AGE,
    COL_EDUCATION, COL_EXPERIENCE, COL_GENDER,
};

use crate::dataset::Dataset;
use crate::errors::TrainerError;
use crate::ols::fit_least_squares;

/// Fits the preprocessing + regression pipeline end-to-end on the full
/// dataset. No train/test split, no cross-validation: the artifact is
/// refit from scratch on every run.
pub struct PipelineTrainer;

impl PipelineTrainer {
    pub fn new() -> Self {
        Self
    }

    /// Fit the pipeline and package the artifact.
    pub fn fit(&self, dataset: &Dataset) -> Result<RegressionModel, TrainerError> {
        if dataset.is_empty() {
            return Err(TrainerError::Dataset("dataset has no rows".to_string()));
        }

        // Fit one category map per categorical column.
        let genders = CategoryMap::fit(dataset.records.iter().map(|r| r.gender.clone()))?;
        let education = CategoryMap::fit(dataset.records.iter().map(|r| r.education.clone()))?;

        // Categorical columns first, then numeric passthrough, matching
        // the canonical column order.
        let schema = FeatureSchema {
            columns: vec![
                SchemaColumn::categorical(COL_GENDER, genders),
                SchemaColumn::categorical(COL_EDUCATION, education),
                SchemaColumn::numeric(COL_EXPERIENCE),
                SchemaColumn::numeric(COL_AGE),
            ],
        };

        // Expand every record through the same schema the server will use.
        let mut rows = Vec::with_capacity(dataset.len());
        let mut targets = Vec::with_capacity(dataset.len());
        for record in &dataset.records {
            let expanded = schema.expand(&record.profile())?;
            rows.push(expanded.features);
            targets.push(record.salary);
        }

        let fit = fit_least_squares(&rows, &targets)?;

        tracing::debug!(
            intercept = fit.intercept,
            weights = ?fit.weights,
            "fitted linear estimator"
        );

        let model_hash = RegressionModel::fingerprint(&schema, &fit.weights, fit.intercept)?;
        let metadata = ModelMetadata {
            version: salarycast_core::VERSION.to_string(),
            created_at: chrono::Utc::now().timestamp() as u64,
            training_rows: dataset.len(),
            feature_width: schema.width(),
            model_hash,
        };

        Ok(RegressionModel {
            schema,
            weights: fit.weights,
            intercept: fit.intercept,
            metadata,
        })
    }
}

impl Default for PipelineTrainer {
    fn default() -> Self {
        Self::new()
    }
}
