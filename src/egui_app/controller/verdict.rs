//! Turns a risk score into what the result section displays.

/// Scores at or above this are reported as a likely dropout.
pub const DROPOUT_THRESHOLD: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskVerdict {
    LikelyDropout,
    NoSignificantRisk,
}

impl RiskVerdict {
    pub fn from_score(risk_score: f64) -> Self {
        if risk_score >= DROPOUT_THRESHOLD {
            Self::LikelyDropout
        } else {
            Self::NoSignificantRisk
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::LikelyDropout => "Likely dropout",
            Self::NoSignificantRisk => "No significant risk",
        }
    }
}

/// `0.73` becomes `"73%"`.
pub fn risk_percent_label(risk_score: f64) -> String {
    format!("{}%", (risk_score * 100.0).round() as i64)
}
