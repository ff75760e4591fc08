//! Canonical column names and the prediction input record

/// Numeric feature column: years of professional experience
pub const COL_EXPERIENCE: &str = "Years of Experience";
/// Numeric feature column: employee age
pub const COL_AGE: &str = "Age";
/// Categorical feature column: gender
pub const COL_GENDER: &str = "Gender";
/// Categorical feature column: education level
pub const COL_EDUCATION: &str = "Education Level";
/// Target column, present only in training data
pub const COL_SALARY: &str = "Salary";

/// The feature columns the serving layer knows how to supply,
/// in canonical order. Artifact schemas must be a subset of this set.
pub const KNOWN_COLUMNS: [&str; 4] = [COL_GENDER, COL_EDUCATION, COL_EXPERIENCE, COL_AGE];

/// A single prediction input assembled from one form submission.
///
/// Ephemeral: built per request, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeProfile {
    pub years_experience: f64,
    pub age: f64,
    pub gender: String,
    pub education: String,
}

impl EmployeeProfile {
    /// Look up a numeric field by canonical column name.
    pub fn numeric(&self, column: &str) -> Option<f64> {
        match column {
            COL_EXPERIENCE => Some(self.years_experience),
            COL_AGE => Some(self.age),
            _ => None,
        }
    }

    /// Look up a categorical field by canonical column name.
    pub fn categorical(&self, column: &str) -> Option<&str> {
        match column {
            COL_GENDER => Some(self.gender.as_str()),
            COL_EDUCATION => Some(self.education.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EmployeeProfile {
        EmployeeProfile {
            years_experience: 6.0,
            age: 30.0,
            gender: "Male".to_string(),
            education: "Bachelor's".to_string(),
        }
    }

    #[test]
    fn numeric_lookup_by_column_name() {
        let p = sample();
        assert_eq!(p.numeric(COL_EXPERIENCE), Some(6.0));
        assert_eq!(p.numeric(COL_AGE), Some(30.0));
        assert_eq!(p.numeric(COL_GENDER), None);
    }

    #[test]
    fn categorical_lookup_by_column_name() {
        let p = sample();
        assert_eq!(p.categorical(COL_GENDER), Some("Male"));
        assert_eq!(p.categorical(COL_EDUCATION), Some("Bachelor's"));
        assert_eq!(p.categorical(COL_SALARY), None);
    }
}
