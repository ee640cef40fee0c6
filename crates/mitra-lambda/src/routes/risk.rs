use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde::Serialize;

use mitra_core::models::alert::EmergencyAssessment;
use mitra_core::models::vitals::{VitalsInput, VitalsRiskResult};
use mitra_engine::{check_vitals_emergency, predict_vitals_risk};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct RiskPrediction {
    #[serde(flatten)]
    result: VitalsRiskResult,
    emergency: EmergencyAssessment,
}

pub async fn predict_risk(
    payload: Result<Json<VitalsInput>, JsonRejection>,
) -> Result<Json<RiskPrediction>, ApiError> {
    let Json(vitals) = payload?;
    vitals.validate()?;

    Ok(Json(RiskPrediction {
        result: predict_vitals_risk(&vitals),
        emergency: check_vitals_emergency(&vitals),
    }))
}
