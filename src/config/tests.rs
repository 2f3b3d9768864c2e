use super::*;
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_config() {
    let content = r#"
coverage:
  thresholds_path: ci/thresholds.json
  fallback_threshold: 60
reference:
  triggers:
    - docs/adr/
  tag: ADR-
  min_digits: 4
"#;
    let config = GateConfig::parse(content, Path::new("ci-gate.yml")).unwrap();
    assert_eq!(
        config.coverage.thresholds_path,
        PathBuf::from("ci/thresholds.json")
    );
    assert_eq!(config.coverage.fallback_threshold, 60);
    assert_eq!(config.reference.triggers, vec!["docs/adr/".to_string()]);
    assert_eq!(config.reference.tag, "ADR-");
    assert_eq!(config.reference.min_digits, 4);
}

#[test]
fn test_parse_partial_config_keeps_defaults() {
    let content = r#"
coverage:
  fallback_threshold: 90
"#;
    let config = GateConfig::parse(content, Path::new("ci-gate.yml")).unwrap();
    assert_eq!(config.coverage.fallback_threshold, 90);
    assert_eq!(
        config.coverage.thresholds_path,
        PathBuf::from(".github/coverage-thresholds.json")
    ); // default
    assert_eq!(config.reference, ReferenceConfig::default());
}

#[test]
fn test_parse_empty_config() {
    let config = GateConfig::parse("  \n", Path::new("ci-gate.yml")).unwrap();
    assert_eq!(config, GateConfig::default());
}

#[test]
fn test_defaults() {
    let config = GateConfig::default();
    assert_eq!(config.coverage.fallback_threshold, 75);
    assert_eq!(
        config.reference.triggers,
        vec!["docs/requirements/".to_string(), "specs/".to_string()]
    );
    assert_eq!(config.reference.tag, "REQ-");
    assert_eq!(config.reference.min_digits, 3);
}

#[test]
fn test_parse_invalid_yaml() {
    let err = GateConfig::parse("coverage: [", Path::new("ci-gate.yml")).unwrap_err();
    assert!(matches!(err, GateError::Config { .. }));
}

#[test]
fn test_load_missing_explicit_config_fails() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("missing.yml");

    let err = GateConfig::load_from(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, GateError::Read { .. }));
}

#[test]
fn test_load_from_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("ci-gate.yml");
    fs::write(&path, "reference:\n  min_digits: 5\n").unwrap();

    let config = GateConfig::load_from(Some(path.as_path())).unwrap();
    assert_eq!(config.reference.min_digits, 5);
    assert_eq!(config.coverage.fallback_threshold, 75);
}

#[test]
fn test_load_rejects_invalid_values() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("ci-gate.yml");

    fs::write(&path, "reference:\n  min_digits: 0\n").unwrap();
    let err = GateConfig::load_from(Some(path.as_path())).unwrap_err();
    assert!(err.to_string().contains("reference.min_digits must be >= 1"));

    fs::write(&path, "coverage:\n  fallback_threshold: 101\n").unwrap();
    let err = GateConfig::load_from(Some(path.as_path())).unwrap_err();
    assert!(err.to_string().contains("coverage.fallback_threshold"));

    fs::write(&path, "reference:\n  triggers: [\"specs/\", \"\"]\n").unwrap();
    let err = GateConfig::load_from(Some(path.as_path())).unwrap_err();
    assert!(err.to_string().contains("reference.triggers[1]"));

    fs::write(&path, "reference:\n  tag: \"\"\n").unwrap();
    let err = GateConfig::load_from(Some(path.as_path())).unwrap_err();
    assert!(err.to_string().contains("reference.tag"));
}

#[test]
#[serial]
fn test_load_ignores_threshold_env() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("ci-gate.yml");
    fs::write(&path, "coverage:\n  fallback_threshold: 60\n").unwrap();

    std::env::set_var("THRESHOLD", "garbage");
    let result = GateConfig::load_from(Some(path.as_path()));
    std::env::remove_var("THRESHOLD");

    assert_eq!(result.unwrap().coverage.fallback_threshold, 60);
}

#[test]
fn test_threshold_env_overrides_file() {
    let mut coverage = CoverageConfig {
        fallback_threshold: 60,
        ..CoverageConfig::default()
    };

    coverage
        .apply_env_with(|key| (key == "THRESHOLD").then(|| "82".to_string()))
        .unwrap();
    assert_eq!(coverage.fallback_threshold, 82);
}

#[test]
fn test_threshold_env_blank_is_ignored() {
    let mut coverage = CoverageConfig::default();
    coverage.apply_env_with(|_| Some("  ".to_string())).unwrap();
    assert_eq!(coverage.fallback_threshold, 75);
}

#[test]
fn test_threshold_env_rejects_garbage() {
    let mut coverage = CoverageConfig::default();

    for raw in ["lots", "75%", "300", "150", "-1"] {
        let err = coverage
            .apply_env_with(|_| Some(raw.to_string()))
            .unwrap_err();
        assert!(matches!(err, GateError::Env { .. }));
        assert_eq!(
            err.to_string(),
            format!(
                "invalid THRESHOLD environment variable: expected an integer percentage 0-100, got `{}`",
                raw
            )
        );
    }
    assert_eq!(coverage.fallback_threshold, 75);
}

#[test]
#[serial]
fn test_apply_env_reads_process_environment() {
    let mut coverage = CoverageConfig::default();

    std::env::set_var("THRESHOLD", "40");
    let result = coverage.apply_env();
    std::env::remove_var("THRESHOLD");

    result.unwrap();
    assert_eq!(coverage.fallback_threshold, 40);
}

#[test]
fn test_cli_overrides_win() {
    let config = GateConfig::default()
        .with_overrides(Some(PathBuf::from("cov/thresholds.json")), Some(90));
    assert_eq!(
        config.coverage.thresholds_path,
        PathBuf::from("cov/thresholds.json")
    );
    assert_eq!(config.coverage.fallback_threshold, 90);

    let untouched = GateConfig::default().with_overrides(None, None);
    assert_eq!(untouched, GateConfig::default());
}
