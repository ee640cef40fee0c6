use axum::Json;
use axum::extract::State;
use serde::Serialize;

use mitra_guidelines::loader::GuidelineDocument;

use crate::state::AppState;

#[derive(Serialize)]
pub struct GuidelineVersion {
    version: String,
    effective_date: String,
}

/// The full table in its loadable document form.
pub async fn get_guidelines(State(state): State<AppState>) -> Json<GuidelineDocument> {
    Json(state.table.to_document())
}

pub async fn get_version(State(state): State<AppState>) -> Json<GuidelineVersion> {
    Json(GuidelineVersion {
        version: state.table.version().to_string(),
        effective_date: state.table.effective_date().to_string(),
    })
}
