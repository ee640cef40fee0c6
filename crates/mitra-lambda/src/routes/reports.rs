use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Serialize;

use mitra_core::models::cardio::CardioRiskScore;
use mitra_core::models::patient::Language;
use mitra_core::models::report::{CategorizedReport, ReportAnalysis};
use mitra_engine::{AnalysisRequest, analyze, cardio_score, categorize_for, explain, validate_parameters};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct Explanation {
    explanation_en: String,
    explanation_hi: String,
}

fn categorized(
    state: &AppState,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<CategorizedReport, ApiError> {
    let Json(request) = payload?;
    validate_parameters(&request.parameters)?;
    Ok(categorize_for(&state.table, &request.parameters, request.sex()))
}

pub async fn categorize_report(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<CategorizedReport>, ApiError> {
    Ok(Json(categorized(&state, payload)?))
}

pub async fn cardio_risk(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<CardioRiskScore>, ApiError> {
    let report = categorized(&state, payload)?;
    Ok(Json(cardio_score(&state.table, &report)))
}

pub async fn analyze_report(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<ReportAnalysis>, ApiError> {
    let Json(request) = payload?;
    Ok(Json(analyze(&state.table, &request)?))
}

pub async fn explain_report(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<Explanation>, ApiError> {
    let report = categorized(&state, payload)?;
    let cardio = cardio_score(&state.table, &report);
    Ok(Json(Explanation {
        explanation_en: explain(&report, &cardio, Language::En),
        explanation_hi: explain(&report, &cardio, Language::Hi),
    }))
}
