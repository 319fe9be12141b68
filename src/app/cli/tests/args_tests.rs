//! Tests for CLI argument parsing and merging with the configuration file

use crate::app::cli::args::*;
use crate::app::cli::config::{ConfigError, FileConfig};
use std::path::PathBuf;

fn parse(args: &[&str]) -> Args {
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
    Args::parse_from_args(&args).unwrap()
}

#[test]
fn test_defaults() {
    let settings = parse(&["speedb-version"]).resolve(None).unwrap();

    assert_eq!(settings.program, DEFAULT_PROGRAM_NAME);
    assert!(!settings.verbose);
    assert_eq!(settings.report, ReportKind::BuildInfo);
    assert_eq!(settings.format, OutputFormat::Text);
    assert_eq!(settings.color, None);
    assert_eq!(settings.log_level, None);
    assert_eq!(settings.log_file, None);
}

#[test]
fn test_report_selection() {
    let cases = [
        (vec!["speedb-version", "--short"], ReportKind::ShortVersion),
        (vec!["speedb-version", "-d"], ReportKind::DebugProperties),
        (vec!["speedb-version", "--families"], ReportKind::Families),
        (vec!["speedb-version", "-v"], ReportKind::BuildInfo),
    ];
    for (argv, expected) in cases {
        assert_eq!(parse(&argv).resolve(None).unwrap().report, expected, "{:?}", argv);
    }
}

#[test]
fn test_short_conflicts_with_verbose() {
    let args: Vec<String> = ["speedb-version", "--short", "--verbose"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert!(Args::parse_from_args(&args).is_err());
}

#[test]
fn test_color_flags_conflict() {
    let args: Vec<String> = ["speedb-version", "--color", "--no-color"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert!(Args::parse_from_args(&args).is_err());
}

#[test]
fn test_invalid_format_rejected_by_parser() {
    let args: Vec<String> = ["speedb-version", "--format", "yaml"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert!(Args::parse_from_args(&args).is_err());
}

#[test]
fn test_command_line_overrides_config() {
    let config = FileConfig {
        program: Some("db_bench".to_string()),
        verbose: Some(false),
        format: Some("json".to_string()),
        color: Some(true),
        log_level: Some("info".to_string()),
        log_format: Some("json".to_string()),
        log_file: Some(PathBuf::from("/tmp/speedb.log")),
    };
    let settings = parse(&[
        "speedb-version",
        "--program",
        "ldb",
        "--verbose",
        "--format",
        "text",
        "--no-color",
        "--log-level",
        "debug",
    ])
    .resolve(Some(config))
    .unwrap();

    assert_eq!(settings.program, "ldb");
    assert!(settings.verbose);
    assert_eq!(settings.format, OutputFormat::Text);
    assert_eq!(settings.color, Some(false));
    assert_eq!(settings.log_level.as_deref(), Some("debug"));
    assert_eq!(settings.log_format.as_deref(), Some("json"));
    assert_eq!(settings.log_file, Some(PathBuf::from("/tmp/speedb.log")));
}

#[test]
fn test_config_values_used_when_flags_absent() {
    let config = FileConfig {
        program: Some("db_bench".to_string()),
        verbose: Some(true),
        format: Some("json".to_string()),
        ..Default::default()
    };
    let settings = parse(&["speedb-version"]).resolve(Some(config)).unwrap();

    assert_eq!(settings.program, "db_bench");
    assert!(settings.verbose);
    assert_eq!(settings.format, OutputFormat::Json);
}

#[test]
fn test_invalid_config_format() {
    let config = FileConfig {
        format: Some("xml".to_string()),
        ..Default::default()
    };
    match parse(&["speedb-version"]).resolve(Some(config)) {
        Err(ConfigError::InvalidValue { key, value }) => {
            assert_eq!(key, "format");
            assert_eq!(value, "xml");
        }
        other => panic!("Expected InvalidValue, got {:?}", other),
    }
}

#[test]
fn test_log_file_none_disables_file_logging() {
    for value in ["none", "NONE", "-"] {
        let settings = parse(&["speedb-version", "--log-file", value])
            .resolve(None)
            .unwrap();
        assert_eq!(settings.log_file, None, "{}", value);
    }
}
