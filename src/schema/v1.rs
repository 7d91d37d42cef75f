use serde::{Deserialize, Serialize};

use crate::survival::RiskTier;

pub const TOOL_NAME: &str = "hcc-survival";
pub const SCHEMA_VERSION: &str = "v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurvivalStatus {
    Ranked,
    NoData,
    Pending,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientMeta {
    pub name: Option<String>,
    pub age: Option<String>,
    pub sex: Option<String>,
    pub treatments: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationMeta {
    pub missing_percentage: Option<f64>,
    pub missing_fields: Vec<String>,
    pub confirmed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreatmentSummary {
    pub rank: usize,
    pub treatment: String,
    pub display_name: String,
    pub median_survival_months: Option<f64>,
    pub max_time_months: f64,
    pub risk: RiskTier,
    pub formatted: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurvivalReport {
    pub status: SurvivalStatus,
    pub reason: Option<String>,
    pub recommended: Option<String>,
    pub treatments: Vec<TreatmentSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicalFlag {
    pub name: String,
    pub fired: bool,
    pub threshold: Option<String>,
    pub details: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HccSurvivalV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub patient: Option<PatientMeta>,
    pub validation: Option<ValidationMeta>,
    pub survival: SurvivalReport,
    pub clinical_flags: Vec<ClinicalFlag>,
    pub warnings: Vec<String>,
}

impl HccSurvivalV1 {
    pub fn empty(tool_version: &str) -> Self {
        Self {
            tool: TOOL_NAME.to_string(),
            version: tool_version.to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            patient: None,
            validation: None,
            survival: SurvivalReport {
                status: SurvivalStatus::Pending,
                reason: None,
                recommended: None,
                treatments: Vec::new(),
            },
            clinical_flags: Vec::new(),
            warnings: Vec::new(),
        }
    }
}
