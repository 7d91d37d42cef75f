use std::fs;

use assert_cmd::Command;
use hcc_survival::schema::v1::{HccSurvivalV1, SurvivalStatus};
use tempfile::TempDir;

const RESPONSE: &str = r#"{
  "Treatments": ["TACE", "Surgical_resection", "Best_support_care"],
  "KM_curves": [
    {"x": [0, 6, 12, 24], "KM_estimate": [1, 0.75, 0.48, 0.3], "Lower_CI": [1, 0.7, 0.4, 0.2], "Upper_CI": [1, 0.8, 0.55, 0.4]},
    {"x": [0, 6, 12, 24], "KM_estimate": [1, 0.95, 0.85, 0.7], "Lower_CI": [1, 0.9, 0.8, 0.6], "Upper_CI": [1, 1.0, 0.9, 0.8]},
    {"x": [0, 3, 6], "KM_estimate": [1, 0.6, 0.35], "Lower_CI": [], "Upper_CI": []}
  ]
}"#;

#[test]
fn summarize_writes_report_and_tables() {
    let tmp = TempDir::new().unwrap();
    let response = tmp.path().join("response.json");
    fs::write(&response, RESPONSE).unwrap();
    let out = tmp.path().join("out");

    let mut cmd = Command::cargo_bin("hcc-survival").unwrap();
    let output = cmd
        .arg("summarize")
        .arg("--response")
        .arg(&response)
        .arg("--out")
        .arg(&out)
        .args(["--json", "--tsv"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Recommended: Surgical resection (very low risk), median survival >24 months"));
    assert!(stdout.contains("  2. TACE (moderately high risk): 12.0 months"));
    assert!(stdout.contains("  3. Best support care (high risk): 6.0 months"));

    let report: HccSurvivalV1 =
        serde_json::from_str(&fs::read_to_string(out.join("hcc_survival.json")).unwrap()).unwrap();
    assert_eq!(report.survival.status, SurvivalStatus::Ranked);
    assert_eq!(report.survival.treatments.len(), 3);
    assert!(report.patient.is_none());

    let survival = fs::read_to_string(out.join("survival.tsv")).unwrap();
    let rows: Vec<&str> = survival.lines().collect();
    assert_eq!(rows.len(), 4);
    assert!(rows[1].starts_with("1\tSurgical_resection\tSurgical resection\tNA\t24.0"));

    let curves = fs::read_to_string(out.join("km_curves.tsv")).unwrap();
    assert_eq!(curves.lines().count(), 1 + 4 + 4 + 3);
    assert!(curves.lines().last().unwrap().ends_with("\tNA\tNA"));
}

#[test]
fn summarize_reports_no_data() {
    let tmp = TempDir::new().unwrap();
    let response = tmp.path().join("response.json");
    fs::write(&response, r#"{"Treatments": ["TACE"]}"#).unwrap();

    let mut cmd = Command::cargo_bin("hcc-survival").unwrap();
    let output = cmd
        .arg("summarize")
        .arg("--response")
        .arg(&response)
        .arg("--out")
        .arg(tmp.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("No KM curve data available"));
    assert!(!tmp.path().join("hcc_survival.json").exists());
}

#[test]
fn summarize_missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("hcc-survival").unwrap();
    cmd.arg("summarize")
        .arg("--response")
        .arg(tmp.path().join("absent.json"))
        .assert()
        .failure();
}

#[test]
fn summarize_wrongly_typed_curves_is_no_data() {
    let tmp = TempDir::new().unwrap();
    let response = tmp.path().join("response.json");
    fs::write(
        &response,
        r#"{"Treatments":["A"],"KM_curves":[{"x":[0,"6"],"KM_estimate":[1,0.4]}]}"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("hcc-survival").unwrap();
    let output = cmd
        .arg("summarize")
        .arg("--response")
        .arg(&response)
        .arg("--out")
        .arg(tmp.path())
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("No KM curve data available (malformed response"));

    let report: HccSurvivalV1 = serde_json::from_str(
        &fs::read_to_string(tmp.path().join("hcc_survival.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(report.survival.status, SurvivalStatus::NoData);
    assert!(report.survival.reason.unwrap().contains("malformed response"));
}
