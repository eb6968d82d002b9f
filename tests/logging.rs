use std::fs;

use kohlrahbi::KohlrahbiError;
use kohlrahbi::logging::{LogConfig, LogFormat, init_logging};
use tempfile::tempdir;

// The global subscriber can only be installed once per process, so the
// whole lifecycle lives in a single test.
#[test]
fn logging_initialises_once_from_file() {
    let temp_dir = tempdir().expect("temporary directory");
    let log_file = temp_dir.path().join("kohlrahbi.log");
    let config_path = temp_dir.path().join("logging.json");
    fs::write(
        &config_path,
        serde_json::json!({
            "level": "debug",
            "format": "compact",
            "log_file": log_file,
        })
        .to_string(),
    )
    .expect("config written");

    let config = LogConfig::from_file(&config_path).expect("config loaded");
    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.log_file.as_deref(), Some(log_file.as_path()));

    init_logging(&config).expect("first initialisation");
    assert!(log_file.exists());

    let second = init_logging(&LogConfig::default());
    assert!(matches!(second, Err(KohlrahbiError::Logging(_))));

    let missing = LogConfig::from_file(&temp_dir.path().join("missing.json"));
    assert!(matches!(missing, Err(KohlrahbiError::Logging(_))));
}
