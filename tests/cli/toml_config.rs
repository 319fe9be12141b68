//! TOML configuration tests

use speedb_build_info::app::cli::args::{Args, OutputFormat};
use speedb_build_info::app::cli::config::{load_config_file, ConfigError};
use std::fs;

#[test]
fn test_config_file_applied() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("speedb-version.toml");
    fs::write(&path, "program = \"ldb\"\nverbose = true\nformat = \"json\"\n").unwrap();

    let config = load_config_file(Some(path.as_path())).unwrap();
    let settings = Args::default().resolve(config).unwrap();

    assert_eq!(settings.program, "ldb");
    assert!(settings.verbose);
    assert_eq!(settings.format, OutputFormat::Json);
}

#[test]
fn test_logging_keys_in_either_spelling() {
    let dir = tempfile::tempdir().unwrap();
    for (name, contents) in [
        ("kebab.toml", "log-level = \"debug\"\nlog-format = \"ext\"\n"),
        ("snake.toml", "log_level = \"debug\"\nlog_format = \"ext\"\n"),
    ] {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();

        let config = load_config_file(Some(path.as_path())).unwrap();
        let settings = Args::default().resolve(config).unwrap();

        assert_eq!(settings.log_level.as_deref(), Some("debug"), "{}", name);
        assert_eq!(settings.log_format.as_deref(), Some("ext"), "{}", name);
    }
}

#[test]
fn test_flag_overrides_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("speedb-version.toml");
    fs::write(&path, "program = \"ldb\"\n").unwrap();

    let config = load_config_file(Some(path.as_path())).unwrap();
    let args = Args {
        program: Some("db_bench".to_string()),
        ..Default::default()
    };
    assert_eq!(args.resolve(config).unwrap().program, "db_bench");
}

#[test]
fn test_malformed_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "program = [\n").unwrap();

    let result = load_config_file(Some(path.as_path()));
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_config_file(Some(dir.path().join("absent.toml").as_path()));
    assert!(matches!(result, Err(ConfigError::NotFound { .. })));
}
