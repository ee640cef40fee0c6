//! mitra-engine
//!
//! Deterministic classification and risk scoring over extracted lab values
//! and vitals. Every operation is a pure function of its inputs and an
//! explicitly passed [`GuidelineTable`](mitra_guidelines::GuidelineTable).

pub mod analyze;
pub mod cardio;
pub mod categorize;
pub mod classify;
pub mod emergency;
pub mod error;
pub mod explain;
pub mod phrases;
pub mod remedies;
pub mod vitals;

pub use analyze::{AnalysisRequest, analyze, validate_parameters};
pub use cardio::{cardio_score, pattern_alert};
pub use categorize::{categorize, categorize_for};
pub use classify::{classify, classify_for};
pub use emergency::{check_report_emergency, check_vitals_emergency};
pub use explain::explain;
pub use vitals::{VitalsRiskModel, predict_vitals_risk};
