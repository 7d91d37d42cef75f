use assert_cmd::Command;

#[test]
fn cli_help_smoke() {
    let mut cmd = Command::cargo_bin("hcc-survival").unwrap();
    cmd.arg("--help");
    cmd.assert().success();
}

#[test]
fn submit_help_lists_form_flags() {
    let mut cmd = Command::cargo_bin("hcc-survival").unwrap();
    let output = cmd.args(["submit", "--help"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    for flag in ["--set", "--treatment", "--no-treatment", "--resume", "--yes", "--api-url"] {
        assert!(stdout.contains(flag), "missing {} in help", flag);
    }
}

#[test]
fn treatments_command_lists_codes() {
    let mut cmd = Command::cargo_bin("hcc-survival").unwrap();
    let output = cmd.arg("treatments").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let codes: Vec<&str> = stdout
        .lines()
        .filter_map(|l| l.split('\t').next())
        .collect();
    assert_eq!(codes.len(), 9);
    assert_eq!(codes[0], "Liver_transplantation");
    assert!(codes.contains(&"Best_support_care"));
}
