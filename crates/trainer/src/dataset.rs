//! CSV dataset loading and preprocessing
//!
//! Reads the salary survey CSV by header name (column order in the file
//! does not matter) and drops rows with any missing field before fitting.

use anyhow::{Context, Result};
use std::path::Path;

use salarycast_core::{
    EmployeeProfile, COL_AGE, COL_EDUCATION, COL_EXPERIENCE, COL_GENDER, COL_SALARY,
};

/// One complete training row
#[derive(Clone, Debug, PartialEq)]
pub struct SalaryRecord {
    pub years_experience: f64,
    pub age: f64,
    pub gender: String,
    pub education: String,
    pub salary: f64,
}

impl SalaryRecord {
    /// Feature view of the record, for schema expansion.
    pub fn profile(&self) -> EmployeeProfile {
        EmployeeProfile {
            years_experience: self.years_experience,
            age: self.age,
            gender: self.gender.clone(),
            education: self.education.clone(),
        }
    }
}

/// Min/max/mean summary for one numeric column
#[derive(Clone, Copy, Debug)]
pub struct ColumnStats {
    pub column: &'static str,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Training dataset after incomplete-row filtering
#[derive(Clone, Debug)]
pub struct Dataset {
    pub records: Vec<SalaryRecord>,
    /// Rows excluded because at least one field was blank
    pub dropped_rows: usize,
}

impl Dataset {
    /// Load the dataset from a CSV file.
    ///
    /// The header must contain the five canonical columns. Rows with any
    /// blank field are dropped and counted; rows with malformed numeric
    /// fields are an error.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("failed to read CSV file {}", path.as_ref().display()))?;

        let mut lines = content.lines().enumerate();
        let (_, header) = lines
            .next()
            .context("CSV file is empty, expected a header row")?;
        let header: Vec<&str> = header.split(',').map(|s| s.trim()).collect();

        let col = |name: &str| -> Result<usize> {
            header
                .iter()
                .position(|h| *h == name)
                .with_context(|| format!("CSV header is missing column '{name}'"))
        };
        let experience_idx = col(COL_EXPERIENCE)?;
        let age_idx = col(COL_AGE)?;
        let gender_idx = col(COL_GENDER)?;
        let education_idx = col(COL_EDUCATION)?;
        let salary_idx = col(COL_SALARY)?;

        let mut records = Vec::new();
        let mut dropped_rows = 0usize;

        for (line_idx, line) in lines {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let parts: Vec<&str> = line.split(',').map(|s| s.trim()).collect();
            if parts.len() != header.len() {
                anyhow::bail!(
                    "line {}: expected {} columns, got {}",
                    line_idx + 1,
                    header.len(),
                    parts.len()
                );
            }

            let fields = [
                parts[experience_idx],
                parts[age_idx],
                parts[gender_idx],
                parts[education_idx],
                parts[salary_idx],
            ];
            if fields.iter().any(|f| f.is_empty()) {
                dropped_rows += 1;
                continue;
            }

            let numeric = |raw: &str, name: &str| -> Result<f64> {
                raw.parse::<f64>()
                    .with_context(|| format!("line {}: invalid number in '{name}'", line_idx + 1))
            };

            records.push(SalaryRecord {
                years_experience: numeric(parts[experience_idx], COL_EXPERIENCE)?,
                age: numeric(parts[age_idx], COL_AGE)?,
                gender: parts[gender_idx].to_string(),
                education: parts[education_idx].to_string(),
                salary: numeric(parts[salary_idx], COL_SALARY)?,
            });
        }

        if records.is_empty() {
            anyhow::bail!("dataset has no complete rows");
        }

        Ok(Self {
            records,
            dropped_rows,
        })
    }

    /// Number of complete samples
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if dataset is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Summary statistics for the numeric columns, for the CLI dump.
    pub fn numeric_stats(&self) -> Vec<ColumnStats> {
        let columns: [(&'static str, fn(&SalaryRecord) -> f64); 3] = [
            (COL_EXPERIENCE, |r| r.years_experience),
            (COL_AGE, |r| r.age),
            (COL_SALARY, |r| r.salary),
        ];

        columns
            .iter()
            .map(|(column, get)| {
                let mut min = f64::INFINITY;
                let mut max = f64::NEG_INFINITY;
                let mut sum = 0.0;
                for record in &self.records {
                    let v = get(record);
                    min = min.min(v);
                    max = max.max(v);
                    sum += v;
                }
                ColumnStats {
                    column,
                    min,
                    max,
                    mean: sum / self.records.len() as f64,
                }
            })
            .collect()
    }
}
