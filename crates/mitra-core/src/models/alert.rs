use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Ordered so that the worst severity compares greatest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum AlertSeverity {
    #[default]
    Normal,
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EmergencyAlert {
    pub parameter: String,
    pub value: f64,
    pub unit: String,
    pub severity: AlertSeverity,
    pub message_en: String,
    pub message_hi: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EmergencyAssessment {
    pub is_emergency: bool,
    pub severity: AlertSeverity,
    pub alerts: Vec<EmergencyAlert>,
    pub total_alerts: usize,
}

impl EmergencyAssessment {
    pub fn from_alerts(alerts: Vec<EmergencyAlert>) -> Self {
        let severity = alerts
            .iter()
            .map(|a| a.severity)
            .max()
            .unwrap_or_default();
        Self {
            is_emergency: severity == AlertSeverity::Critical,
            severity,
            total_alerts: alerts.len(),
            alerts,
        }
    }
}
