//! CLI argument parsing tests

use speedb_build_info::app::cli::args::{Args, OutputFormat, ReportKind};
use speedb_build_info::app::startup::render_report;
use speedb_build_info::speedb_version_string;

fn args(argv: &[&str]) -> Vec<String> {
    argv.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_program_name_in_report() {
    let parsed = Args::parse_from_args(&args(&["speedb-version", "-p", "db_bench"])).unwrap();
    let settings = parsed.resolve(None).unwrap();
    let report = render_report(&settings).unwrap();

    assert!(report.starts_with("db_bench (Speedb) "));
}

#[test]
fn test_short_json_version() {
    let parsed =
        Args::parse_from_args(&args(&["speedb-version", "--short", "--format", "json"])).unwrap();
    let settings = parsed.resolve(None).unwrap();
    assert_eq!(settings.report, ReportKind::ShortVersion);
    assert_eq!(settings.format, OutputFormat::Json);

    let report = render_report(&settings).unwrap();
    assert_eq!(report, format!("\"{}\"", speedb_version_string(false)));
}

#[test]
fn test_unknown_flag_rejected() {
    assert!(Args::parse_from_args(&args(&["speedb-version", "--repo", "x"])).is_err());
}

#[test]
fn test_invalid_log_level_rejected() {
    assert!(Args::parse_from_args(&args(&["speedb-version", "--log-level", "loud"])).is_err());
}
