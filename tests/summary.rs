use hcc_survival::ctx::{Ctx, Halt};
use hcc_survival::flags::compute_clinical_flags;
use hcc_survival::form::{self, ClinicalField, PatientRecord};
use hcc_survival::io::summary::{format_record, format_summary};
use hcc_survival::session::{Session, SessionStore};
use hcc_survival::survival::{self, KmCurve, ResponseData};
use hcc_survival::treatment::Treatment;
use tempfile::TempDir;

fn ctx(tmp: &TempDir) -> Ctx {
    let session = Session::fresh(SessionStore::new(tmp.path()));
    Ctx::new(tmp.path().to_path_buf(), session, false, false, "1.2.3")
}

fn patient() -> PatientRecord {
    PatientRecord::from_parts(
        vec![
            (ClinicalField::Name, "Tsai".to_string()),
            (ClinicalField::Age, "72".to_string()),
            (ClinicalField::Sex, "F".to_string()),
            (ClinicalField::TotalBilirubin, "3.1".to_string()),
        ],
        vec![Treatment::Tace, Treatment::Immunotherapy],
    )
}

#[test]
fn ranked_summary_lists_recommendation_first() {
    let tmp = TempDir::new().unwrap();
    let mut ctx = ctx(&tmp);
    let record = patient();
    ctx.decision = Some(form::assess(&record));
    ctx.confirmed = true;
    ctx.clinical_flags = compute_clinical_flags(&record);
    ctx.record = Some(record);
    ctx.outcome = Some(survival::summarize(&ResponseData {
        treatments: Some(vec!["TACE".to_string(), "Immunotherapy".to_string()]),
        km_curves: Some(vec![
            KmCurve {
                x: vec![0.0, 10.0, 20.0],
                km_estimate: vec![1.0, 0.6, 0.5],
                ..KmCurve::default()
            },
            KmCurve {
                x: vec![0.0, 10.0, 20.0],
                km_estimate: vec![1.0, 0.4, 0.2],
                ..KmCurve::default()
            },
        ]),
        malformed: None,
    }));

    let text = format_summary(&ctx).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "hcc-survival v1.2.3");
    assert_eq!(lines[1], "Patient: Tsai, age 72, sex F, treatments: TACE, Immunotherapy");
    assert!(lines[2].starts_with("Missing fields: "));
    assert!(lines[2].ends_with("(confirmed)"));
    assert_eq!(lines[3], "Flags: bilirubin_elevated");
    assert_eq!(
        lines[4],
        "Recommended: TACE (moderately high risk), median survival 20.0 months"
    );
    assert!(text.contains("  2. Immunotherapy (high risk): 10.0 months"));
}

#[test]
fn halted_summary_stops_after_status() {
    let tmp = TempDir::new().unwrap();
    let mut ctx = ctx(&tmp);
    let record = patient();
    ctx.decision = Some(form::assess(&record));
    ctx.record = Some(record);
    ctx.halt = Some(Halt::ConfirmationDeclined {
        missing_percentage: 90.3,
    });

    let text = format_summary(&ctx).unwrap();
    assert!(text.contains("Status: submission cancelled: 90.3% of fields are empty"));
    assert!(!text.contains("Flags:"));
    assert!(!text.contains("Recommended"));
}

#[test]
fn record_view_groups_sections() {
    let text = format_record(&patient());
    let basic = text.find("[Patient]").unwrap();
    let physio = text.find("[Physiological").unwrap();
    let treatments = text.find("[Treatments]").unwrap();
    assert!(basic < physio && physio < treatments);
    assert!(text.contains("(TACE)"));
    assert!(text.contains("(Immunotherapy)"));
}
