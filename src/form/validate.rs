use crate::form::fields::{ClinicalField, FieldKind};
use crate::form::record::PatientRecord;
use crate::form::ValidationError;

pub const MISSING_CONFIRM_THRESHOLD_PCT: f64 = 50.0;

pub const AGE_RANGE: (f64, f64) = (0.0, 150.0);
pub const BMI_RANGE: (f64, f64) = (10.0, 50.0);

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitDecision {
    Submit {
        missing_percentage: f64,
    },
    ConfirmationRequired {
        missing: Vec<ClinicalField>,
        missing_percentage: f64,
    },
}

impl SubmitDecision {
    pub fn missing_percentage(&self) -> f64 {
        match self {
            SubmitDecision::Submit { missing_percentage }
            | SubmitDecision::ConfirmationRequired {
                missing_percentage, ..
            } => *missing_percentage,
        }
    }
}

pub fn validate(record: &PatientRecord) -> Result<(), ValidationError> {
    for field in [ClinicalField::Age, ClinicalField::Sex] {
        if !record.is_provided(field) {
            return Err(ValidationError::MissingRequiredField { field });
        }
    }

    check_range(record, ClinicalField::Age, AGE_RANGE)?;
    check_range(record, ClinicalField::Bmi, BMI_RANGE)?;

    if record.treatments().is_empty() {
        return Err(ValidationError::NoTreatmentSelected);
    }
    Ok(())
}

fn check_range(
    record: &PatientRecord,
    field: ClinicalField,
    (min, max): (f64, f64),
) -> Result<(), ValidationError> {
    let Some(raw) = record.get(field) else {
        return Ok(());
    };
    let in_range = raw
        .parse::<f64>()
        .map(|v| v >= min && v <= max)
        .unwrap_or(false);
    if in_range {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value: raw.to_string(),
            min,
            max,
        })
    }
}

pub fn missing_fields(record: &PatientRecord) -> Vec<ClinicalField> {
    ClinicalField::ALL
        .iter()
        .copied()
        .filter(|f| f.counts_toward_completeness() && !record.is_provided(*f))
        .collect()
}

pub fn missing_percentage(record: &PatientRecord) -> f64 {
    let total = ClinicalField::ALL
        .iter()
        .filter(|f| f.counts_toward_completeness())
        .count();
    if total == 0 {
        return 0.0;
    }
    missing_fields(record).len() as f64 / total as f64 * 100.0
}

pub fn assess(record: &PatientRecord) -> SubmitDecision {
    let missing = missing_fields(record);
    let missing_percentage = missing_percentage(record);
    if missing_percentage > MISSING_CONFIRM_THRESHOLD_PCT {
        SubmitDecision::ConfirmationRequired {
            missing,
            missing_percentage,
        }
    } else {
        SubmitDecision::Submit { missing_percentage }
    }
}

pub fn lint(record: &PatientRecord) -> Vec<String> {
    let mut warnings = Vec::new();
    for (field, value) in record.values() {
        match field.kind() {
            FieldKind::Numeric => {
                if value.parse::<f64>().map(|v| !v.is_finite()).unwrap_or(true) {
                    warnings.push(format!("{} is not a number: '{}'", field, value));
                }
            }
            FieldKind::Categorical(codes) if !codes.is_empty() => {
                if !codes.contains(&value) {
                    warnings.push(format!(
                        "{} has unexpected code '{}' (expected one of {})",
                        field,
                        value,
                        codes.join("/")
                    ));
                }
            }
            _ => {}
        }
    }
    warnings
}
