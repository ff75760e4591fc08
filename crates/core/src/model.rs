//! The fitted regression artifact: prediction, validation, persistence
//!
//! An artifact bundles the feature schema with the linear estimator so
//! the serving layer loads a single file. Persistence is canonical JSON
//! plus a sidecar blake3 digest; the recorded `model_hash` covers the
//! fitted parameters themselves, so both the file bytes and the
//! estimator can be verified independently.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::errors::{CoreError, Result};
use crate::features::FeatureSchema;
use crate::serialization::canonical_json_string;
use crate::types::EmployeeProfile;

/// Metadata recorded alongside the fitted estimator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelMetadata {
    /// Version of the crate that produced the artifact
    pub version: String,
    /// Unix timestamp (seconds) of the training run
    pub created_at: u64,
    /// Rows remaining after incomplete-row filtering
    pub training_rows: usize,
    /// Width of the expanded feature vector
    pub feature_width: usize,
    /// blake3 digest over the canonical schema + parameters
    pub model_hash: String,
}

/// The persisted pipeline artifact: feature schema + linear estimator.
///
/// Immutable after load; the serving layer shares it behind an `Arc`
/// with no mutation path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegressionModel {
    pub schema: FeatureSchema,
    /// One weight per expanded feature, in schema order
    pub weights: Vec<f64>,
    pub intercept: f64,
    pub metadata: ModelMetadata,
}

/// Result of one prediction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub salary: f64,
    /// Set when an unknown categorical value fell back to the
    /// reference encoding
    pub degraded: bool,
}

#[derive(Serialize)]
struct Fingerprint<'a> {
    schema: &'a FeatureSchema,
    weights: &'a [f64],
    intercept: f64,
}

impl RegressionModel {
    /// Digest of the fitted parameters, independent of metadata.
    pub fn fingerprint(schema: &FeatureSchema, weights: &[f64], intercept: f64) -> Result<String> {
        let payload = Fingerprint {
            schema,
            weights,
            intercept,
        };
        let json = canonical_json_string(&payload)?;
        Ok(hex::encode(blake3::hash(json.as_bytes()).as_bytes()))
    }

    /// Predict a salary for one profile.
    ///
    /// Deterministic: identical inputs against the same artifact yield
    /// identical outputs.
    pub fn predict(&self, profile: &EmployeeProfile) -> Result<Prediction> {
        let row = self.schema.expand(profile)?;

        if row.features.len() != self.weights.len() {
            return Err(CoreError::InvalidParameters(format!(
                "expanded {} features but model has {} weights",
                row.features.len(),
                self.weights.len()
            )));
        }

        let salary = self.intercept
            + row
                .features
                .iter()
                .zip(&self.weights)
                .map(|(x, w)| x * w)
                .sum::<f64>();

        Ok(Prediction {
            salary,
            degraded: row.degraded,
        })
    }

    /// Startup validation against the serving field set.
    ///
    /// Checks the schema (every expected column must be servable; a
    /// subset is fine), the parameter shapes, finiteness, and the
    /// recorded parameter digest. Run once at load time so schema drift
    /// surfaces as a hard error instead of per-request recovery.
    pub fn validate(&self, known: &[&str]) -> Result<()> {
        self.schema.check_against(known)?;

        let width = self.schema.width();
        if self.weights.len() != width {
            return Err(CoreError::InvalidParameters(format!(
                "schema expands to {} features but model has {} weights",
                width,
                self.weights.len()
            )));
        }
        if self.metadata.feature_width != width {
            return Err(CoreError::InvalidParameters(format!(
                "metadata records feature width {} but schema expands to {}",
                self.metadata.feature_width, width
            )));
        }
        if !self.intercept.is_finite() || self.weights.iter().any(|w| !w.is_finite()) {
            return Err(CoreError::InvalidParameters(
                "model parameters contain non-finite values".to_string(),
            ));
        }

        let expected = Self::fingerprint(&self.schema, &self.weights, self.intercept)?;
        if expected != self.metadata.model_hash {
            return Err(CoreError::Integrity(format!(
                "recorded model hash {} does not match parameters ({})",
                self.metadata.model_hash, expected
            )));
        }

        Ok(())
    }

    /// Write the artifact as canonical JSON with a sidecar blake3 digest.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = canonical_json_string(self)?;
        fs::write(path, &json)?;

        let digest = hex::encode(blake3::hash(json.as_bytes()).as_bytes());
        fs::write(path.with_extension("hash"), &digest)?;

        tracing::debug!("saved artifact to {}", path.display());
        Ok(())
    }

    /// Load an artifact, verifying the sidecar digest when present.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;

        let hash_path = path.with_extension("hash");
        match fs::read_to_string(&hash_path) {
            Ok(recorded) => {
                let digest = hex::encode(blake3::hash(json.as_bytes()).as_bytes());
                if digest != recorded.trim() {
                    return Err(CoreError::Integrity(format!(
                        "artifact digest mismatch for {}",
                        path.display()
                    )));
                }
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::warn!(
                    "no digest sidecar at {}, skipping byte verification",
                    hash_path.display()
                );
            }
            Err(err) => return Err(err.into()),
        }

        Ok(serde_json::from_str(&json)?)
    }
}
