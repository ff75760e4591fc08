//! Fitted feature encoding: category maps and the feature schema
//!
//! The schema records which input columns the artifact was trained on,
//! in which order, and how categorical columns expand into indicator
//! features. It is persisted inside the artifact, so the serving layer
//! recovers the expected columns without inspecting the estimator.

use serde::{Deserialize, Serialize};

use crate::errors::{CoreError, Result};
use crate::types::EmployeeProfile;

/// Fitted one-hot encoder for a single categorical column.
///
/// Categories are stored sorted and deduplicated. Encoding emits one
/// indicator per category except the first (reference) category, which
/// is dropped and represented by the all-zero row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryMap {
    categories: Vec<String>,
}

impl CategoryMap {
    /// Fit a category map from observed training values.
    ///
    /// Fails on an empty value set: a categorical column with no
    /// observed categories cannot be encoded.
    pub fn fit<I, S>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut categories: Vec<String> = values.into_iter().map(Into::into).collect();
        categories.sort();
        categories.dedup();

        if categories.is_empty() {
            return Err(CoreError::InvalidParameters(
                "cannot fit a category map from zero values".to_string(),
            ));
        }

        Ok(Self { categories })
    }

    /// All fitted categories, sorted. The first entry is the reference
    /// category dropped from the encoding.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Number of indicator features this column expands into.
    pub fn width(&self) -> usize {
        self.categories.len().saturating_sub(1)
    }

    /// Append the indicator row for `value` to `out`.
    ///
    /// Returns `false` when the value was not seen during fitting; the
    /// all-zero reference row is emitted in that case so the feature
    /// vector keeps its shape.
    pub fn encode_into(&self, value: &str, out: &mut Vec<f64>) -> bool {
        let position = self.categories.iter().position(|c| c == value);

        for idx in 1..self.categories.len() {
            out.push(if position == Some(idx) { 1.0 } else { 0.0 });
        }

        position.is_some()
    }
}

/// Whether a schema column passes through numerically or one-hot encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

/// One expected input column, in artifact order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SchemaColumn {
    pub name: String,
    pub kind: ColumnKind,
    /// Fitted categories; present exactly when `kind` is categorical.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoryMap>,
}

impl SchemaColumn {
    pub fn numeric(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ColumnKind::Numeric,
            categories: None,
        }
    }

    pub fn categorical(name: impl Into<String>, categories: CategoryMap) -> Self {
        Self {
            name: name.into(),
            kind: ColumnKind::Categorical,
            categories: Some(categories),
        }
    }
}

/// Ordered list of the input columns an artifact expects.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FeatureSchema {
    pub columns: Vec<SchemaColumn>,
}

/// A profile expanded against a schema, ready for the estimator.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedRow {
    pub features: Vec<f64>,
    /// Set when a categorical value was unknown and fell back to the
    /// reference encoding.
    pub degraded: bool,
}

impl FeatureSchema {
    /// Total width of the expanded feature vector.
    pub fn width(&self) -> usize {
        self.columns
            .iter()
            .map(|c| match c.kind {
                ColumnKind::Numeric => 1,
                ColumnKind::Categorical => {
                    c.categories.as_ref().map(CategoryMap::width).unwrap_or(0)
                }
            })
            .sum()
    }

    /// Expected input column names, in artifact order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Structural checks: every column must name a field the serving
    /// layer can supply, and categorical columns must carry fitted
    /// categories. A schema covering only a subset of `known` is valid.
    pub fn check_against(&self, known: &[&str]) -> Result<()> {
        if self.columns.is_empty() {
            return Err(CoreError::Schema("schema has no columns".to_string()));
        }

        for column in &self.columns {
            if !known.contains(&column.name.as_str()) {
                return Err(CoreError::Schema(format!(
                    "artifact expects unknown column '{}'",
                    column.name
                )));
            }
            if column.kind == ColumnKind::Categorical && column.categories.is_none() {
                return Err(CoreError::InvalidParameters(format!(
                    "categorical column '{}' has no fitted categories",
                    column.name
                )));
            }
        }

        Ok(())
    }

    /// Expand a profile into the estimator's feature vector, selecting
    /// exactly the columns this schema records, in order.
    pub fn expand(&self, profile: &EmployeeProfile) -> Result<ExpandedRow> {
        let mut features = Vec::with_capacity(self.width());
        let mut degraded = false;

        for column in &self.columns {
            match column.kind {
                ColumnKind::Numeric => {
                    let value = profile.numeric(&column.name).ok_or_else(|| {
                        CoreError::Schema(format!("no numeric field named '{}'", column.name))
                    })?;
                    features.push(value);
                }
                ColumnKind::Categorical => {
                    let map = column.categories.as_ref().ok_or_else(|| {
                        CoreError::InvalidParameters(format!(
                            "categorical column '{}' has no fitted categories",
                            column.name
                        ))
                    })?;
                    let value = profile.categorical(&column.name).ok_or_else(|| {
                        CoreError::Schema(format!(
                            "no categorical field named '{}'",
                            column.name
                        ))
                    })?;
                    if !map.encode_into(value, &mut features) {
                        degraded = true;
                    }
                }
            }
        }

        Ok(ExpandedRow { features, degraded })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{COL_AGE, COL_EDUCATION, COL_EXPERIENCE, COL_GENDER, KNOWN_COLUMNS};

    fn profile() -> EmployeeProfile {
        EmployeeProfile {
            years_experience: 6.0,
            age: 30.0,
            gender: "Male".to_string(),
            education: "Bachelor's".to_string(),
        }
    }

    fn schema() -> FeatureSchema {
        let genders = CategoryMap::fit(["Male", "Female"]).unwrap();
        let education = CategoryMap::fit(["Bachelor's", "Master's", "PhD"]).unwrap();
        FeatureSchema {
            columns: vec![
                SchemaColumn::categorical(COL_GENDER, genders),
                SchemaColumn::categorical(COL_EDUCATION, education),
                SchemaColumn::numeric(COL_EXPERIENCE),
                SchemaColumn::numeric(COL_AGE),
            ],
        }
    }

    #[test]
    fn fit_sorts_and_dedups() {
        let map = CategoryMap::fit(["PhD", "Bachelor's", "Master's", "PhD"]).unwrap();
        assert_eq!(map.categories(), ["Bachelor's", "Master's", "PhD"]);
        assert_eq!(map.width(), 2);
    }

    #[test]
    fn fit_rejects_empty_input() {
        let empty: [&str; 0] = [];
        assert!(CategoryMap::fit(empty).is_err());
    }

    #[test]
    fn reference_category_encodes_to_zeros() {
        let map = CategoryMap::fit(["Female", "Male"]).unwrap();
        let mut out = Vec::new();
        // "Female" sorts first and is the dropped reference category
        assert!(map.encode_into("Female", &mut out));
        assert_eq!(out, [0.0]);
    }

    #[test]
    fn non_reference_category_sets_indicator() {
        let map = CategoryMap::fit(["Bachelor's", "Master's", "PhD"]).unwrap();
        let mut out = Vec::new();
        assert!(map.encode_into("PhD", &mut out));
        assert_eq!(out, [0.0, 1.0]);
    }

    #[test]
    fn unknown_category_encodes_to_reference_row() {
        let map = CategoryMap::fit(["Female", "Male"]).unwrap();
        let mut out = Vec::new();
        assert!(!map.encode_into("Other", &mut out));
        assert_eq!(out, [0.0]);
    }

    #[test]
    fn expand_follows_schema_order() {
        let row = schema().expand(&profile()).unwrap();
        // Gender: Male over {Female, Male} -> [1]
        // Education: Bachelor's is the reference over three levels -> [0, 0]
        // then experience and age pass through
        assert_eq!(row.features, [1.0, 0.0, 0.0, 6.0, 30.0]);
        assert!(!row.degraded);
    }

    #[test]
    fn expand_flags_unknown_category_as_degraded() {
        let mut input = profile();
        input.education = "Diploma".to_string();
        let row = schema().expand(&input).unwrap();
        assert_eq!(row.features, [1.0, 0.0, 0.0, 6.0, 30.0]);
        assert!(row.degraded);
    }

    #[test]
    fn subset_schema_expands_only_recorded_columns() {
        let schema = FeatureSchema {
            columns: vec![SchemaColumn::numeric(COL_EXPERIENCE)],
        };
        let row = schema.expand(&profile()).unwrap();
        assert_eq!(row.features, [6.0]);
    }

    #[test]
    fn check_against_accepts_subset_rejects_unknown() {
        assert!(schema().check_against(&KNOWN_COLUMNS).is_ok());

        let subset = FeatureSchema {
            columns: vec![SchemaColumn::numeric(COL_EXPERIENCE)],
        };
        assert!(subset.check_against(&KNOWN_COLUMNS).is_ok());

        let unknown = FeatureSchema {
            columns: vec![SchemaColumn::numeric("Tenure")],
        };
        assert!(unknown.check_against(&KNOWN_COLUMNS).is_err());
    }
}
