//! Salarycast trainer CLI
//!
//! Deterministic offline trainer producing the regression artifact the
//! prediction service loads.

use anyhow::{Context, Result};
use clap::Parser;
use salarycast_core::EmployeeProfile;
use salarycast_trainer::{Dataset, PipelineTrainer};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "salarycast-train")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Deterministic salary regression trainer", long_about = None)]
struct Args {
    /// Input CSV dataset path
    #[arg(short, long, default_value = "data/salary.csv")]
    input: PathBuf,

    /// Output directory for the model artifact and digest
    #[arg(short, long, default_value = "models/salary")]
    output: PathBuf,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!("Salarycast trainer v{}", env!("CARGO_PKG_VERSION"));

    info!("Loading dataset from: {}", args.input.display());
    let dataset = Dataset::from_csv(&args.input).context("Failed to load dataset")?;

    info!(
        "Loaded {} complete rows ({} dropped for missing fields)",
        dataset.len(),
        dataset.dropped_rows
    );

    for stats in dataset.numeric_stats() {
        info!(
            "  {}: min={:.1}, max={:.1}, mean={:.1}",
            stats.column, stats.min, stats.max, stats.mean
        );
    }

    info!("Fitting pipeline...");
    let model = PipelineTrainer::new().fit(&dataset)?;

    info!("Fit complete");
    info!("  Feature width: {}", model.metadata.feature_width);
    info!("  Intercept: {:.4}", model.intercept);
    info!("  Model hash: {}", model.metadata.model_hash);

    // Smoke check against a fixed probe row.
    let probe = EmployeeProfile {
        years_experience: 6.0,
        age: 30.0,
        gender: "Male".to_string(),
        education: "Bachelor's".to_string(),
    };
    let prediction = model.predict(&probe)?;
    info!(
        "Probe prediction (6 yrs, age 30, Male, Bachelor's): ₹{:.2}",
        prediction.salary
    );

    let model_path = args.output.join("active.json");
    info!("Saving artifact to: {}", model_path.display());
    model
        .save(&model_path)
        .context("Failed to write model artifact")?;

    info!("✓ Training completed successfully");
    info!("  Model: {}", model_path.display());
    info!("  Digest: {}", model_path.with_extension("hash").display());

    Ok(())
}
