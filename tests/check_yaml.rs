use std::path::Path;

use ueb::check::{TestResult, check_yaml};

#[test]
fn ueb_grade1() {
    let results = check_yaml(Path::new("tests/yaml/ueb-g1.yaml")).unwrap();
    let failures: Vec<&TestResult> = results
        .iter()
        .filter(|r| r.is_failure() || r.is_unexpected_success())
        .collect();
    assert_eq!(failures, Vec::<&TestResult>::new());
    assert_eq!(results.iter().filter(|r| r.is_expected_failure()).count(), 1);
}

#[test]
fn missing_file() {
    assert!(check_yaml(Path::new("tests/yaml/does-not-exist.yaml")).is_err());
}
