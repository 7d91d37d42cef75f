mod fields;
mod record;
mod state;
mod validate;

pub use fields::{ClinicalField, FieldKind, Section, UnknownField};
pub use record::PatientRecord;
pub use state::{FormState, TreatmentToggles};
pub use validate::{
    AGE_RANGE, BMI_RANGE, MISSING_CONFIRM_THRESHOLD_PCT, SubmitDecision, assess, lint,
    missing_fields, missing_percentage, validate,
};

use crate::treatment::UnknownTreatment;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("required field {field} is empty")]
    MissingRequiredField { field: ClinicalField },
    #[error("{field} must be a number between {min} and {max}, got '{value}'")]
    OutOfRange {
        field: ClinicalField,
        value: String,
        min: f64,
        max: f64,
    },
    #[error("select at least one treatment")]
    NoTreatmentSelected,
}

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error(transparent)]
    UnknownField(#[from] UnknownField),
    #[error(transparent)]
    UnknownTreatment(#[from] UnknownTreatment),
    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
    #[error("expected Field=Value, got '{0}'")]
    MalformedAssignment(String),
}

pub fn parse_assignment(raw: &str) -> Result<(ClinicalField, String), FormError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| FormError::MalformedAssignment(raw.to_string()))?;
    let field: ClinicalField = key.parse()?;
    Ok((field, value.trim().to_string()))
}
