//! HTTP surface: the form page, the prediction endpoint, and health
//!
//! User-input problems re-render the form with a message and answer
//! 200; only internal failures (unreachable on a startup-validated
//! artifact) surface as 500.

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use salarycast_core::EmployeeProfile;

use crate::page::render_page;
use crate::state::AppState;

/// Shown when any of the four form fields is missing or blank.
pub const MSG_MISSING_FIELDS: &str = "Please fill in all fields before predicting.";
/// Shown when experience or age fails numeric parsing.
pub const MSG_INVALID_NUMERIC: &str =
    "Please enter valid numeric values for experience and age.";

type SharedState = Arc<AppState>;

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn internal<S: Into<String>>(message: S) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let payload = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, payload).into_response()
    }
}

/// The four raw form fields of one prediction request.
///
/// All fields default to empty so a missing key and a blank value take
/// the same validation path.
#[derive(Debug, Deserialize)]
pub struct PredictForm {
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub education: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    model_hash: String,
    uptime_secs: u64,
}

/// Bind and serve until the listener fails.
pub async fn start_server(state: AppState, addr: &str) -> Result<()> {
    let app = build_router(Arc::new(state));
    let listener = bind_listener(addr).await?;
    info!("Salarycast server listening on {addr}");
    axum::serve(listener, app)
        .await
        .context("prediction server terminated unexpectedly")
}

async fn bind_listener(addr: &str) -> Result<tokio::net::TcpListener> {
    if let Ok(socket_addr) = addr.parse::<SocketAddr>() {
        tokio::net::TcpListener::bind(socket_addr)
            .await
            .with_context(|| format!("failed to bind listener on {socket_addr}"))
    } else {
        tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind listener on {addr}"))
    }
}

pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/predict", post(handle_predict))
        .route("/health", get(handle_health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn handle_index() -> Html<String> {
    Html(render_page(None, None))
}

async fn handle_predict(
    State(state): State<SharedState>,
    Form(form): Form<PredictForm>,
) -> Result<Html<String>, ApiError> {
    let experience = form.experience.trim();
    let age = form.age.trim();
    let gender = form.gender.trim();
    let education = form.education.trim();

    if [experience, age, gender, education].iter().any(|f| f.is_empty()) {
        return Ok(Html(render_page(None, Some(MSG_MISSING_FIELDS))));
    }

    let years_experience: f64 = match experience.parse() {
        Ok(v) => v,
        Err(_) => return Ok(Html(render_page(None, Some(MSG_INVALID_NUMERIC)))),
    };
    let age: i64 = match age.parse() {
        Ok(v) => v,
        Err(_) => return Ok(Html(render_page(None, Some(MSG_INVALID_NUMERIC)))),
    };

    let profile = EmployeeProfile {
        years_experience,
        age: age as f64,
        gender: gender.to_string(),
        education: education.to_string(),
    };

    // The schema was validated at startup; the only mismatch left is an
    // unknown categorical value, which degrades to the reference
    // encoding inside predict.
    let prediction = state
        .model
        .predict(&profile)
        .map_err(|err| ApiError::internal(format!("prediction failed: {err}")))?;

    if prediction.degraded {
        warn!(
            gender,
            education, "unknown categorical value, served reference-encoded prediction"
        );
    }

    let text = format!("Predicted Salary: ₹{:.2}", prediction.salary);
    Ok(Html(render_page(Some(&text), None)))
}

async fn handle_health(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: crate::VERSION,
        model_hash: state.model.metadata.model_hash.clone(),
        uptime_secs: state.uptime_seconds(),
    })
}
