//! Search configuration files.

use crate::common::write_text;
use pkgfind::{ConfigError, SearchConfig, CODE_THRESHOLD, DEFAULT_THRESHOLD};

#[test]
fn test_defaults_match_library_constants() {
    let config = SearchConfig::default();
    assert_eq!(config.threshold, DEFAULT_THRESHOLD);
    assert_eq!(config.code_threshold, CODE_THRESHOLD);
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_from_file() {
    let file = write_text(r#"{"threshold": 72.5, "suggest_limit": 8}"#);
    let config = SearchConfig::from_file(file.path()).unwrap();

    assert_eq!(config.threshold, 72.5);
    assert_eq!(config.suggest_limit, 8);
    assert_eq!(config.limit, 10);
}

#[test]
fn test_invalid_values_rejected() {
    for json in [
        r#"{"threshold": -1}"#,
        r#"{"code_threshold": 100.5}"#,
        r#"{"limit": 0}"#,
        r#"{"regex_limit": 0}"#,
    ] {
        let file = write_text(json);
        assert!(
            matches!(SearchConfig::from_file(file.path()), Err(ConfigError::Validation(_))),
            "accepted {}",
            json
        );
    }
}

#[test]
fn test_malformed_file_rejected() {
    let file = write_text("threshold = 60");
    assert!(matches!(
        SearchConfig::from_file(file.path()),
        Err(ConfigError::Parse(_))
    ));
}
