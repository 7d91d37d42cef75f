use std::fs::File;
use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;
use hcc_survival::io::read_response;
use hcc_survival::survival;
use tempfile::TempDir;

const BODY: &str = r#"{"Treatments":["Radiofrequency"],"KM_curves":[{"x":[0,12,30],"KM_estimate":[1,0.62,0.41],"Lower_CI":[1,0.5,0.3],"Upper_CI":[1,0.7,0.5]}]}"#;

#[test]
fn gz_and_plain_responses_match() {
    let tmp = TempDir::new().unwrap();
    let plain = tmp.path().join("response.json");
    std::fs::write(&plain, BODY).unwrap();

    let gz = tmp.path().join("response.json.gz");
    let mut enc = GzEncoder::new(File::create(&gz).unwrap(), Compression::default());
    enc.write_all(BODY.as_bytes()).unwrap();
    enc.finish().unwrap();

    let a = read_response(&plain).unwrap();
    let b = read_response(&gz).unwrap();
    assert_eq!(a, b);

    let outcome = survival::summarize(&b);
    let best = outcome.ranking().unwrap().recommended().unwrap();
    assert_eq!(best.median_survival, Some(30.0));
    assert_eq!(best.formatted(), "30.0 months");
}

#[test]
fn invalid_response_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("response.json");
    std::fs::write(&path, "not json").unwrap();
    let err = read_response(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("invalid prediction response"));
}
