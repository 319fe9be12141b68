//! Application startup: arguments, configuration, logging, then the report

use crate::app::cli::args::{Args, OutputFormat, ReportKind, Settings};
use crate::app::cli::config::{load_config_file, ConfigError};
use crate::core::build_info::{build_info_string, debug_properties_summary, BuildInfo};
use crate::core::error_handling::{fatal_message, log_error_with_context, ContextualError};
use crate::core::logging::init_logging;
use crate::core::version::speedb_version_string;
use crate::plugin::api::builtin_registry;
use clap::Parser;
use std::io::{IsTerminal, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to serialize build information: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl ContextualError for AppError {
    fn is_user_actionable(&self) -> bool {
        match self {
            AppError::Config(e) => e.is_user_actionable(),
            _ => false,
        }
    }

    fn user_message(&self) -> Option<String> {
        match self {
            AppError::Config(e) => e.user_message(),
            _ => None,
        }
    }
}

/// Initialize application startup
pub fn startup() {
    let args = Args::parse();

    let settings = match load_config_file(args.config_file.as_deref())
        .and_then(|config| args.resolve(config))
    {
        Ok(settings) => settings,
        Err(e) => {
            // Logging is not configured yet
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let use_color = settings
        .color
        .unwrap_or_else(|| std::io::stderr().is_terminal());
    let log_file = settings
        .log_file
        .as_ref()
        .map(|p| p.to_string_lossy().to_string());
    let logging_ready = match init_logging(
        settings.log_level.as_deref(),
        settings.log_format.as_deref(),
        log_file.as_deref(),
        use_color,
    ) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Warning: could not initialise logging: {}", e);
            false
        }
    };

    log::debug!("Settings: {:?}", settings);

    let result = render_report(&settings).and_then(|report| {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", report)?;
        Ok(())
    });
    if let Err(e) = result {
        const CONTEXT: &str = "Reporting build information";
        log_error_with_context(&e, CONTEXT);
        if !logger_reaches_stderr(logging_ready, settings.log_file.is_some()) {
            eprintln!("{}", fatal_message(&e, CONTEXT));
        }
        std::process::exit(1);
    }
}

/// Whether error records from the logger already appear on stderr
pub(crate) fn logger_reaches_stderr(logging_ready: bool, logs_to_file: bool) -> bool {
    logging_ready && !logs_to_file
}

/// Produce the report text selected by `settings`
pub fn render_report(settings: &Settings) -> Result<String, AppError> {
    match (settings.report, settings.format) {
        (ReportKind::BuildInfo, OutputFormat::Json) => {
            Ok(BuildInfo::current().to_json(&settings.program, settings.verbose)?)
        }
        (ReportKind::BuildInfo, OutputFormat::Text) => {
            Ok(build_info_string(&settings.program, settings.verbose))
        }
        (ReportKind::ShortVersion, OutputFormat::Json) => {
            Ok(serde_json::to_string(&speedb_version_string(false))?)
        }
        (ReportKind::ShortVersion, OutputFormat::Text) => Ok(speedb_version_string(false)),
        (ReportKind::DebugProperties, OutputFormat::Json) => {
            Ok(serde_json::to_string_pretty(BuildInfo::current().debug_properties)?)
        }
        (ReportKind::DebugProperties, OutputFormat::Text) => {
            Ok(debug_properties_summary().trim_start().to_string())
        }
        (ReportKind::Families, OutputFormat::Json) => {
            Ok(serde_json::to_string_pretty(&builtin_registry().families())?)
        }
        (ReportKind::Families, OutputFormat::Text) => {
            Ok(builtin_registry().families().join("\n"))
        }
    }
}
