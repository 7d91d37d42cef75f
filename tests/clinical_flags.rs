use hcc_survival::flags::compute_clinical_flags;
use hcc_survival::form::{ClinicalField, PatientRecord};
use hcc_survival::treatment::Treatment;

fn record(values: &[(ClinicalField, &str)]) -> PatientRecord {
    PatientRecord::from_parts(
        values.iter().map(|(f, v)| (*f, v.to_string())),
        [Treatment::Tace],
    )
}

fn fired(record: &PatientRecord) -> Vec<String> {
    compute_clinical_flags(record)
        .into_iter()
        .filter(|f| f.fired)
        .map(|f| f.name)
        .collect()
}

#[test]
fn quiet_record_fires_nothing() {
    let r = record(&[
        (ClinicalField::Afp, "20"),
        (ClinicalField::Cirrhosis, "0"),
        (ClinicalField::TotalBilirubin, "0.8"),
    ]);
    let flags = compute_clinical_flags(&r);
    assert_eq!(flags.len(), 4);
    assert!(flags.iter().all(|f| !f.fired));
}

#[test]
fn afp_boundary_not_fired() {
    let r = record(&[(ClinicalField::Afp, "400")]);
    assert!(fired(&r).is_empty());
    let r = record(&[(ClinicalField::Afp, "400.1")]);
    assert_eq!(fired(&r), vec!["afp_elevated"]);
}

#[test]
fn all_flags_fire() {
    let r = record(&[
        (ClinicalField::Afp, "1200"),
        (ClinicalField::Cirrhosis, "1"),
        (ClinicalField::Metastasis, "Yes"),
        (ClinicalField::TotalBilirubin, "2.4"),
    ]);
    assert_eq!(
        fired(&r),
        vec![
            "afp_elevated",
            "cirrhosis_present",
            "metastasis_present",
            "bilirubin_elevated"
        ]
    );
    let afp = compute_clinical_flags(&r)
        .into_iter()
        .find(|f| f.name == "afp_elevated")
        .unwrap();
    assert_eq!(afp.details.as_deref(), Some("AFP=1200"));
}

#[test]
fn unparseable_values_do_not_fire() {
    let r = record(&[(ClinicalField::Afp, "very high")]);
    assert!(fired(&r).is_empty());
}
