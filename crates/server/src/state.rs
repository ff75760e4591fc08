//! Shared application state
//!
//! The model is loaded once at process start and never mutated
//! afterwards, so the state needs no locking of any kind.

use salarycast_core::RegressionModel;
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct AppState {
    /// The validated artifact, read-only for the process lifetime
    pub model: Arc<RegressionModel>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(model: RegressionModel) -> Self {
        Self {
            model: Arc::new(model),
            start_time: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
