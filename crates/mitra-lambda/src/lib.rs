//! mitra-lambda
//!
//! HTTP surface of the classification engine, served on AWS Lambda.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};

use config::Config;
use state::AppState;

/// Build the router with audit logging and CORS applied.
pub fn app(state: AppState, config: &Config) -> eyre::Result<Router> {
    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/guidelines", get(routes::guidelines::get_guidelines))
        .route("/guidelines/version", get(routes::guidelines::get_version))
        .route("/reports/categorize", post(routes::reports::categorize_report))
        .route("/reports/cardio", post(routes::reports::cardio_risk))
        .route("/reports/analyze", post(routes::reports::analyze_report))
        .route("/reports/explain", post(routes::reports::explain_report))
        .route("/risk/predict", post(routes::risk::predict_risk))
        .fallback(routes::not_found)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(config.cors()?)
        .with_state(state);
    Ok(app)
}
