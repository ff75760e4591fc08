//! Salarycast prediction service CLI
//!
//! Loads and validates the trained artifact, then serves the
//! prediction form.

use anyhow::{Context, Result};
use clap::Parser;
use salarycast_core::{RegressionModel, KNOWN_COLUMNS};
use salarycast_server::{start_server, AppState};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "salarycast-server")]
#[command(about = "Salary prediction web service")]
#[command(version)]
struct Cli {
    /// Bind address
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Bind port
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Path to the trained model artifact
    #[arg(long, default_value = "models/salary/active.json")]
    model: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let model = RegressionModel::load(&cli.model)
        .with_context(|| format!("failed to load model artifact {}", cli.model.display()))?;

    // Schema drift surfaces here, once, instead of per request.
    model
        .validate(&KNOWN_COLUMNS)
        .context("model artifact failed startup validation")?;

    tracing::info!(
        "Loaded model {} ({} features, trained on {} rows)",
        model.metadata.model_hash,
        model.metadata.feature_width,
        model.metadata.training_rows
    );

    let addr = format!("{}:{}", cli.host, cli.port);
    start_server(AppState::new(model), &addr).await
}
