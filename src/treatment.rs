use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Variant order is the canonical order used when a treatment list is derived
/// from checkbox state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Treatment {
    #[serde(rename = "Liver_transplantation")]
    LiverTransplantation,
    #[serde(rename = "Surgical_resection")]
    SurgicalResection,
    #[serde(rename = "Radiofrequency")]
    Radiofrequency,
    #[serde(rename = "TACE")]
    Tace,
    #[serde(rename = "Target_therapy")]
    TargetTherapy,
    #[serde(rename = "Immunotherapy")]
    Immunotherapy,
    #[serde(rename = "HAIC")]
    Haic,
    #[serde(rename = "Radiotherapy")]
    Radiotherapy,
    #[serde(rename = "Best_support_care")]
    BestSupportCare,
}

impl Treatment {
    pub const ALL: [Treatment; 9] = [
        Treatment::LiverTransplantation,
        Treatment::SurgicalResection,
        Treatment::Radiofrequency,
        Treatment::Tace,
        Treatment::TargetTherapy,
        Treatment::Immunotherapy,
        Treatment::Haic,
        Treatment::Radiotherapy,
        Treatment::BestSupportCare,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Treatment::LiverTransplantation => "Liver_transplantation",
            Treatment::SurgicalResection => "Surgical_resection",
            Treatment::Radiofrequency => "Radiofrequency",
            Treatment::Tace => "TACE",
            Treatment::TargetTherapy => "Target_therapy",
            Treatment::Immunotherapy => "Immunotherapy",
            Treatment::Haic => "HAIC",
            Treatment::Radiotherapy => "Radiotherapy",
            Treatment::BestSupportCare => "Best_support_care",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Treatment::LiverTransplantation => "Liver transplantation",
            Treatment::SurgicalResection => "Surgical resection",
            Treatment::Radiofrequency => "Radiofrequency ablation",
            Treatment::Tace => "Transarterial chemoembolization (TACE)",
            Treatment::TargetTherapy => "Targeted therapy",
            Treatment::Immunotherapy => "Immunotherapy",
            Treatment::Haic => "Hepatic arterial infusion chemotherapy (HAIC)",
            Treatment::Radiotherapy => "Radiotherapy",
            Treatment::BestSupportCare => "Best supportive care",
        }
    }
}

impl fmt::Display for Treatment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown treatment code '{0}'")]
pub struct UnknownTreatment(pub String);

impl FromStr for Treatment {
    type Err = UnknownTreatment;

    // Codes are matched case-insensitively so `tace` and `TACE` both work on
    // the command line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Treatment::ALL
            .iter()
            .copied()
            .find(|t| t.code().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownTreatment(trimmed.to_string()))
    }
}
