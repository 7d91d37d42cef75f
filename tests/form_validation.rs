use hcc_survival::form::{
    self, ClinicalField, FormState, PatientRecord, SubmitDecision, ValidationError,
};
use hcc_survival::treatment::Treatment;

fn record(values: &[(ClinicalField, &str)], treatments: &[Treatment]) -> PatientRecord {
    let mut form = FormState::new();
    for (field, value) in values {
        form.set(*field, *value);
    }
    for t in treatments {
        form.toggle(*t, true);
    }
    form.record()
}

fn filled_except(skip: usize) -> PatientRecord {
    // Fill every completeness field except the last `skip` of them.
    let fields: Vec<ClinicalField> = ClinicalField::ALL
        .iter()
        .copied()
        .filter(|f| f.counts_toward_completeness())
        .collect();
    let keep = fields.len() - skip;
    let mut form = FormState::new();
    for field in &fields[..keep] {
        let value = match field {
            ClinicalField::Age => "70",
            ClinicalField::Sex => "M",
            ClinicalField::Bmi => "24",
            _ => "1",
        };
        form.set(*field, value);
    }
    form.toggle(Treatment::Tace, true);
    form.record()
}

#[test]
fn age_out_of_range_is_rejected() {
    let r = record(
        &[(ClinicalField::Age, "200"), (ClinicalField::Sex, "M")],
        &[Treatment::Tace],
    );
    let err = form::validate(&r).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::OutOfRange {
            field: ClinicalField::Age,
            ..
        }
    ));
}

#[test]
fn no_treatment_selected_is_rejected() {
    let r = record(&[(ClinicalField::Age, "70"), (ClinicalField::Sex, "M")], &[]);
    assert_eq!(
        form::validate(&r).unwrap_err(),
        ValidationError::NoTreatmentSelected
    );
}

#[test]
fn missing_sex_is_rejected_before_ranges() {
    let r = record(&[(ClinicalField::Age, "200")], &[Treatment::Tace]);
    assert_eq!(
        form::validate(&r).unwrap_err(),
        ValidationError::MissingRequiredField {
            field: ClinicalField::Sex
        }
    );
}

#[test]
fn whitespace_only_age_counts_as_missing() {
    let r = record(
        &[(ClinicalField::Age, "   "), (ClinicalField::Sex, "F")],
        &[Treatment::Tace],
    );
    assert_eq!(
        form::validate(&r).unwrap_err(),
        ValidationError::MissingRequiredField {
            field: ClinicalField::Age
        }
    );
}

#[test]
fn bmi_range_checked_only_when_provided() {
    let ok = record(
        &[(ClinicalField::Age, "70"), (ClinicalField::Sex, "M")],
        &[Treatment::Haic],
    );
    assert!(form::validate(&ok).is_ok());

    let low = record(
        &[
            (ClinicalField::Age, "70"),
            (ClinicalField::Sex, "M"),
            (ClinicalField::Bmi, "5"),
        ],
        &[Treatment::Haic],
    );
    assert!(matches!(
        form::validate(&low).unwrap_err(),
        ValidationError::OutOfRange {
            field: ClinicalField::Bmi,
            ..
        }
    ));
}

#[test]
fn range_bounds_are_inclusive() {
    for age in ["0", "150"] {
        let r = record(
            &[
                (ClinicalField::Age, age),
                (ClinicalField::Sex, "F"),
                (ClinicalField::Bmi, "50"),
            ],
            &[Treatment::Radiotherapy],
        );
        assert!(form::validate(&r).is_ok(), "age {} should pass", age);
    }
}

#[test]
fn non_numeric_age_is_out_of_range() {
    let r = record(
        &[(ClinicalField::Age, "seventy"), (ClinicalField::Sex, "M")],
        &[Treatment::Tace],
    );
    assert!(matches!(
        form::validate(&r).unwrap_err(),
        ValidationError::OutOfRange { .. }
    ));

    // Trailing units are not stripped.
    let r = record(
        &[(ClinicalField::Age, "70 y"), (ClinicalField::Sex, "M")],
        &[Treatment::Tace],
    );
    let err = form::validate(&r).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Age must be a number between 0 and 150, got '70 y'"
    );
}

#[test]
fn sparse_record_requires_confirmation() {
    let r = record(
        &[(ClinicalField::Age, "70"), (ClinicalField::Sex, "M")],
        &[Treatment::Tace],
    );
    assert!(form::validate(&r).is_ok());
    let pct = form::missing_percentage(&r);
    assert!((pct - 29.0 / 31.0 * 100.0).abs() < 1e-9);
    match form::assess(&r) {
        SubmitDecision::ConfirmationRequired {
            missing,
            missing_percentage,
        } => {
            assert_eq!(missing.len(), 29);
            assert!(!missing.contains(&ClinicalField::Name));
            assert!(missing_percentage > 50.0);
        }
        other => panic!("expected confirmation, got {:?}", other),
    }
}

#[test]
fn name_does_not_count_toward_completeness() {
    let with_name = record(
        &[
            (ClinicalField::Name, "Chen"),
            (ClinicalField::Age, "70"),
            (ClinicalField::Sex, "M"),
        ],
        &[Treatment::Tace],
    );
    let without = record(
        &[(ClinicalField::Age, "70"), (ClinicalField::Sex, "M")],
        &[Treatment::Tace],
    );
    assert_eq!(
        form::missing_percentage(&with_name),
        form::missing_percentage(&without)
    );
}

#[test]
fn confirmation_threshold_is_strictly_above_half() {
    // 15 of 31 missing is 48.4%, 16 of 31 is 51.6%.
    assert!(matches!(
        form::assess(&filled_except(15)),
        SubmitDecision::Submit { .. }
    ));
    assert!(matches!(
        form::assess(&filled_except(16)),
        SubmitDecision::ConfirmationRequired { .. }
    ));
}

#[test]
fn complete_record_submits_directly() {
    let r = filled_except(0);
    assert!(form::validate(&r).is_ok());
    assert_eq!(
        form::assess(&r),
        SubmitDecision::Submit {
            missing_percentage: 0.0
        }
    );
}

#[test]
fn lint_reports_unexpected_codes_without_blocking() {
    let r = record(
        &[
            (ClinicalField::Age, "70"),
            (ClinicalField::Sex, "X"),
            (ClinicalField::Afp, "high"),
            (ClinicalField::Cirrhosis, "1"),
        ],
        &[Treatment::Tace],
    );
    let warnings = form::lint(&r);
    assert_eq!(warnings.len(), 2);
    assert!(warnings.iter().any(|w| w.starts_with("Sex")));
    assert!(warnings.iter().any(|w| w.starts_with("AFP")));
    assert!(form::validate(&r).is_ok());
}

#[test]
fn assignment_parsing() {
    let (field, value) = form::parse_assignment("total_bilirubin= 1.2").unwrap();
    assert_eq!(field, ClinicalField::TotalBilirubin);
    assert_eq!(value, "1.2");
    assert!(form::parse_assignment("Age").is_err());
    assert!(form::parse_assignment("Weight=80").is_err());
}
