use serde::{Deserialize, Serialize};

pub mod median;
pub mod ranking;

pub use median::{check_confidence_band, check_curve, max_time, median_survival};
pub use ranking::{format_survival_time, rank, summarize};

pub const MEDIAN_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KmCurve {
    #[serde(default)]
    pub x: Vec<f64>,
    #[serde(rename = "KM_estimate", default)]
    pub km_estimate: Vec<f64>,
    #[serde(rename = "Lower_CI", default)]
    pub lower_ci: Vec<f64>,
    #[serde(rename = "Upper_CI", default)]
    pub upper_ci: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseData {
    #[serde(rename = "Treatments", default, skip_serializing_if = "Option::is_none")]
    pub treatments: Option<Vec<String>>,
    #[serde(rename = "KM_curves", default, skip_serializing_if = "Option::is_none")]
    pub km_curves: Option<Vec<KmCurve>>,
    #[serde(skip)]
    pub malformed: Option<String>,
}

impl ResponseData {
    /// Converts a parsed JSON body. A body with wrongly typed fields becomes an
    /// empty response that carries the decode error, so it summarizes as no data.
    pub fn from_value(value: serde_json::Value) -> Self {
        match serde_json::from_value(value) {
            Ok(response) => response,
            Err(err) => ResponseData {
                malformed: Some(format!("malformed response: {}", err)),
                ..ResponseData::default()
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    VeryLow,
    Low,
    Moderate,
    ModeratelyHigh,
    High,
}

impl RiskTier {
    pub fn from_median(median_months: Option<f64>) -> Self {
        match median_months {
            None => RiskTier::VeryLow,
            Some(m) if m >= 36.0 => RiskTier::Low,
            Some(m) if m >= 24.0 => RiskTier::Moderate,
            Some(m) if m >= 12.0 => RiskTier::ModeratelyHigh,
            Some(_) => RiskTier::High,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskTier::VeryLow => "very low risk",
            RiskTier::Low => "low risk",
            RiskTier::Moderate => "moderate risk",
            RiskTier::ModeratelyHigh => "moderately high risk",
            RiskTier::High => "high risk",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreatmentSurvivalSummary {
    pub treatment: String,
    pub display_name: String,
    pub median_survival: Option<f64>,
    pub max_time: f64,
    pub risk: RiskTier,
}

impl TreatmentSurvivalSummary {
    pub fn formatted(&self) -> String {
        format_survival_time(self.median_survival, self.max_time)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SurvivalRanking {
    pub ranked: Vec<TreatmentSurvivalSummary>,
}

impl SurvivalRanking {
    pub fn recommended(&self) -> Option<&TreatmentSurvivalSummary> {
        self.ranked.first()
    }

    pub fn comparison(&self) -> &[TreatmentSurvivalSummary] {
        self.ranked.get(1..).unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SurvivalOutcome {
    Ranked(SurvivalRanking),
    NoData { reason: String },
}

impl SurvivalOutcome {
    pub fn ranking(&self) -> Option<&SurvivalRanking> {
        match self {
            SurvivalOutcome::Ranked(r) => Some(r),
            SurvivalOutcome::NoData { .. } => None,
        }
    }
}
