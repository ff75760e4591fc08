//! Integration tests for the deterministic trainer
//!
//! Ensures identical artifacts are produced across runs and that the
//! fitted pipeline round-trips through the on-disk artifact.

use anyhow::Result;
use salarycast_core::{EmployeeProfile, RegressionModel, KNOWN_COLUMNS};
use salarycast_trainer::{train_model_from_csv, Dataset, PipelineTrainer};
use std::io::Write;
use tempfile::NamedTempFile;

/// Noiseless synthetic survey: salary is an exact linear function of
/// the encoded features, so the fit should recover it.
fn create_synthetic_csv() -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "Years of Experience,Age,Gender,Education Level,Salary")?;

    let rows = [
        (2.0, 24.0, "Female", "Bachelor's"),
        (3.0, 27.0, "Male", "Bachelor's"),
        (5.0, 29.0, "Female", "Master's"),
        (6.0, 30.0, "Male", "Bachelor's"),
        (8.0, 35.0, "Male", "Master's"),
        (10.0, 38.0, "Female", "Bachelor's"),
        (12.0, 41.0, "Male", "Master's"),
        (15.0, 45.0, "Female", "Master's"),
    ];
    for (exp, age, gender, education) in rows {
        let salary = expected_salary(exp, age, gender, education);
        writeln!(file, "{exp},{age},{gender},{education},{salary}")?;
    }

    // One incomplete row the loader must drop before fitting.
    writeln!(file, "7,,Male,Bachelor's,61750")?;

    file.flush()?;
    Ok(file)
}

fn expected_salary(exp: f64, age: f64, gender: &str, education: &str) -> f64 {
    let male = if gender == "Male" { 8000.0 } else { 0.0 };
    let masters = if education == "Master's" { 12000.0 } else { 0.0 };
    25000.0 + male + masters + 4500.0 * exp + 250.0 * age
}

fn probe() -> EmployeeProfile {
    EmployeeProfile {
        years_experience: 6.0,
        age: 30.0,
        gender: "Male".to_string(),
        education: "Bachelor's".to_string(),
    }
}

#[test]
fn test_training_is_deterministic_across_runs() -> Result<()> {
    let file = create_synthetic_csv()?;

    let model1 = train_model_from_csv(file.path())?;
    let model2 = train_model_from_csv(file.path())?;

    assert_eq!(model1.weights, model2.weights, "weights should be identical");
    assert_eq!(
        model1.intercept, model2.intercept,
        "intercept should be identical"
    );
    assert_eq!(
        model1.metadata.model_hash, model2.metadata.model_hash,
        "parameter digests should be identical"
    );

    let p1 = model1.predict(&probe())?;
    let p2 = model2.predict(&probe())?;
    assert_eq!(p1.salary, p2.salary, "probe predictions should be identical");

    Ok(())
}

#[test]
fn test_incomplete_rows_are_dropped_before_fitting() -> Result<()> {
    let file = create_synthetic_csv()?;
    let dataset = Dataset::from_csv(file.path())?;

    assert_eq!(dataset.len(), 8);
    assert_eq!(dataset.dropped_rows, 1);

    Ok(())
}

#[test]
fn test_fit_recovers_the_generating_function() -> Result<()> {
    let file = create_synthetic_csv()?;
    let model = train_model_from_csv(file.path())?;

    // Probe combinations that were not in the training set.
    let cases = [
        (6.0, 30.0, "Male", "Bachelor's"),
        (4.0, 31.0, "Female", "Master's"),
        (9.0, 36.0, "Male", "Master's"),
    ];
    for (exp, age, gender, education) in cases {
        let input = EmployeeProfile {
            years_experience: exp,
            age,
            gender: gender.to_string(),
            education: education.to_string(),
        };
        let expected = expected_salary(exp, age, gender, education);
        let got = model.predict(&input)?;
        assert!(
            (got.salary - expected).abs() < 1.0,
            "{gender}/{education}: predicted {} expected {expected}",
            got.salary
        );
    }

    Ok(())
}

#[test]
fn test_artifact_round_trips_to_serving() -> Result<()> {
    let file = create_synthetic_csv()?;
    let dataset = Dataset::from_csv(file.path())?;
    let model = PipelineTrainer::new().fit(&dataset)?;

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("active.json");
    model.save(&path)?;

    let loaded = RegressionModel::load(&path)?;
    loaded.validate(&KNOWN_COLUMNS)?;

    let before = model.predict(&probe())?;
    let after = loaded.predict(&probe())?;
    assert_eq!(before.salary, after.salary);

    Ok(())
}

#[test]
fn test_unseen_category_degrades_instead_of_failing() -> Result<()> {
    let file = create_synthetic_csv()?;
    let model = train_model_from_csv(file.path())?;

    let mut input = probe();
    input.education = "PhD".to_string();

    let got = model.predict(&input)?;
    assert!(got.degraded);
    // Falls back to the reference education level.
    let expected = expected_salary(6.0, 30.0, "Male", "Bachelor's");
    assert!((got.salary - expected).abs() < 1.0);

    Ok(())
}
