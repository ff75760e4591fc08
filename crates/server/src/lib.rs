//! Salarycast prediction service
//!
//! Serves the prediction form over HTTP against a single artifact that
//! is loaded and schema-validated once at startup, then shared
//! read-only across requests. Each POST is an independent, stateless
//! request-response cycle.

pub mod page;
pub mod server;
pub mod state;


pub use server::{build_router, start_server};
pub use state::AppState;

/// Crate version string for the health endpoint
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
