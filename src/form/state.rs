use std::collections::BTreeMap;

use crate::form::fields::ClinicalField;
use crate::form::record::PatientRecord;
use crate::treatment::Treatment;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreatmentToggles {
    checked: BTreeMap<Treatment, bool>,
}

impl TreatmentToggles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, treatment: Treatment, checked: bool) {
        self.checked.insert(treatment, checked);
    }

    pub fn is_checked(&self, treatment: Treatment) -> bool {
        self.checked.get(&treatment).copied().unwrap_or(false)
    }

    pub fn clear(&mut self) {
        self.checked.clear();
    }

    pub fn treatments(&self) -> Vec<Treatment> {
        Treatment::ALL
            .iter()
            .copied()
            .filter(|t| self.is_checked(*t))
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: BTreeMap<ClinicalField, String>,
    toggles: TreatmentToggles,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: ClinicalField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn get(&self, field: ClinicalField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn toggle(&mut self, treatment: Treatment, checked: bool) {
        self.toggles.set(treatment, checked);
    }

    pub fn toggles(&self) -> &TreatmentToggles {
        &self.toggles
    }

    pub fn apply_record(&mut self, record: &PatientRecord) {
        for (field, value) in record.values() {
            self.values.insert(field, value.to_string());
        }
        self.toggles.clear();
        for treatment in record.treatments() {
            self.toggles.set(*treatment, true);
        }
    }

    pub fn record(&self) -> PatientRecord {
        PatientRecord::from_parts(
            self.values.iter().map(|(f, v)| (*f, v.clone())),
            self.toggles.treatments(),
        )
    }
}
