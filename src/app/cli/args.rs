//! Command line arguments for `speedb-version`
//!
//! Flags given on the command line take precedence over values read from
//! the TOML configuration file.

use crate::app::cli::config::{ConfigError, FileConfig};
use clap::Parser;
use std::path::PathBuf;

/// Program name shown in the build information line when none is configured
pub const DEFAULT_PROGRAM_NAME: &str = "speedb-version";

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "speedb-version")]
#[command(about = "Report the version and build properties of this Speedb build")]
pub struct Args {
    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Program name reported in the build information line
    #[arg(short = 'p', long = "program", value_name = "NAME")]
    pub program: Option<String>,

    /// Include git and build properties
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Print only major.minor
    #[arg(short = 's', long = "short", conflicts_with_all = ["verbose", "debug_properties", "families"])]
    pub short: bool,

    /// Print only the debug properties summary
    #[arg(short = 'd', long = "debug-properties", conflicts_with = "families")]
    pub debug_properties: bool,

    /// List the builtin plugin families
    #[arg(long = "families")]
    pub families: bool,

    /// Output format
    #[arg(long = "format", value_name = "FORMAT", value_parser = ["text", "json"])]
    pub format: Option<String>,

    /// Force colored log output
    #[arg(long = "color")]
    pub color: bool,

    /// Disable colored log output
    #[arg(long = "no-color", conflicts_with = "color")]
    pub no_color: bool,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log file path (use 'none' to disable file logging)
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT", value_parser = ["text", "ext", "json"])]
    pub log_format: Option<String>,
}

/// Output format of the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::InvalidValue {
                key: "format".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// What to report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportKind {
    /// Program name, versions and, when verbose, the property sets
    #[default]
    BuildInfo,
    /// major.minor only
    ShortVersion,
    /// Debug properties summary only
    DebugProperties,
    /// Builtin plugin family names
    Families,
}

/// Arguments merged with the configuration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub program: String,
    pub verbose: bool,
    pub report: ReportKind,
    pub format: OutputFormat,
    pub color: Option<bool>,
    pub log_level: Option<String>,
    pub log_format: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Parse arguments from a provided argument list
    pub fn parse_from_args(args: &[String]) -> Result<Self, clap::Error> {
        Self::try_parse_from(args)
    }

    /// Merge with `config`; command line values win
    pub fn resolve(&self, config: Option<FileConfig>) -> Result<Settings, ConfigError> {
        let config = config.unwrap_or_default();

        let format = match self.format.as_deref().or(config.format.as_deref()) {
            Some(value) => OutputFormat::parse(value)?,
            None => OutputFormat::Text,
        };

        let report = if self.short {
            ReportKind::ShortVersion
        } else if self.debug_properties {
            ReportKind::DebugProperties
        } else if self.families {
            ReportKind::Families
        } else {
            ReportKind::BuildInfo
        };

        let color = if self.color {
            Some(true)
        } else if self.no_color {
            Some(false)
        } else {
            config.color
        };

        // "none" and "-" in either place disable file logging
        let log_file = self
            .log_file
            .clone()
            .or(config.log_file)
            .filter(|p| !(p.as_os_str().eq_ignore_ascii_case("none") || p.as_os_str() == "-"));

        Ok(Settings {
            program: self
                .program
                .clone()
                .or(config.program)
                .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string()),
            verbose: self.verbose || config.verbose.unwrap_or(false),
            report,
            format,
            color,
            log_level: self.log_level.clone().or(config.log_level),
            log_format: self.log_format.clone().or(config.log_format),
            log_file,
        })
    }
}
