use std::collections::{BTreeMap, BTreeSet};

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::form::fields::ClinicalField;
use crate::form::FormError;
use crate::treatment::Treatment;

const TREATMENTS_KEY: &str = "Treatments";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawRecord")]
pub struct PatientRecord {
    values: BTreeMap<ClinicalField, String>,
    treatments: Vec<Treatment>,
}

impl PatientRecord {
    pub fn from_parts<I, T>(values: I, treatments: T) -> Self
    where
        I: IntoIterator<Item = (ClinicalField, String)>,
        T: IntoIterator<Item = Treatment>,
    {
        let values = values
            .into_iter()
            .filter_map(|(field, value)| {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some((field, trimmed.to_string()))
                }
            })
            .collect();
        let treatments = treatments
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        Self { values, treatments }
    }

    pub fn get(&self, field: ClinicalField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn is_provided(&self, field: ClinicalField) -> bool {
        self.values.contains_key(&field)
    }

    pub fn values(&self) -> impl Iterator<Item = (ClinicalField, &str)> {
        self.values.iter().map(|(f, v)| (*f, v.as_str()))
    }

    pub fn treatments(&self) -> &[Treatment] {
        &self.treatments
    }

    pub fn numeric(&self, field: ClinicalField) -> Option<f64> {
        self.get(field)
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|v| v.is_finite())
    }

    pub fn display_name(&self) -> &str {
        self.get(ClinicalField::Name).unwrap_or("Unnamed patient")
    }
}

impl Serialize for PatientRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ClinicalField::ALL.len() + 1))?;
        for field in ClinicalField::ALL {
            map.serialize_entry(field.code(), self.get(field).unwrap_or(""))?;
        }
        map.serialize_entry(TREATMENTS_KEY, &self.treatments)?;
        map.end()
    }
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Treatments", alias = "treatments", default)]
    treatments: Option<Vec<String>>,
    #[serde(flatten)]
    fields: BTreeMap<String, serde_json::Value>,
}

impl TryFrom<RawRecord> for PatientRecord {
    type Error = FormError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let mut values = Vec::with_capacity(raw.fields.len());
        for (key, value) in raw.fields {
            let field: ClinicalField = key.parse()?;
            let text = match value {
                serde_json::Value::Null => continue,
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                other => {
                    return Err(FormError::InvalidValue {
                        field: field.code(),
                        value: other.to_string(),
                    });
                }
            };
            values.push((field, text));
        }

        let mut treatments = Vec::new();
        for code in raw.treatments.unwrap_or_default() {
            treatments.push(code.parse::<Treatment>()?);
        }

        Ok(PatientRecord::from_parts(values, treatments))
    }
}
