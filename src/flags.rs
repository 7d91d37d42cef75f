use crate::form::{ClinicalField, PatientRecord};

const AFP_ELEVATED_NG_ML: f64 = 400.0;
const BILIRUBIN_ELEVATED_MG_DL: f64 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ClinicalFlag {
    pub name: String,
    pub fired: bool,
    pub threshold: String,
    pub details: Option<String>,
}

pub fn compute_clinical_flags(record: &PatientRecord) -> Vec<ClinicalFlag> {
    vec![
        flag_above(
            record,
            "afp_elevated",
            ClinicalField::Afp,
            AFP_ELEVATED_NG_ML,
        ),
        flag_present(record, "cirrhosis_present", ClinicalField::Cirrhosis),
        flag_present(record, "metastasis_present", ClinicalField::Metastasis),
        flag_above(
            record,
            "bilirubin_elevated",
            ClinicalField::TotalBilirubin,
            BILIRUBIN_ELEVATED_MG_DL,
        ),
    ]
}

fn flag_above(record: &PatientRecord, name: &str, field: ClinicalField, limit: f64) -> ClinicalFlag {
    let value = record.numeric(field);
    ClinicalFlag {
        name: name.to_string(),
        fired: value.map(|v| v > limit).unwrap_or(false),
        threshold: format!("{} > {}", field, limit),
        details: value.map(|v| format!("{}={}", field, v)),
    }
}

fn flag_present(record: &PatientRecord, name: &str, field: ClinicalField) -> ClinicalFlag {
    let value = record.get(field);
    ClinicalFlag {
        name: name.to_string(),
        fired: matches!(value, Some("1") | Some("Yes")),
        threshold: format!("{} = 1", field),
        details: value.map(|v| format!("{}={}", field, v)),
    }
}
