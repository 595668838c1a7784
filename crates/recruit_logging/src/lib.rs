#![deny(missing_docs)]
//! Shared logging utilities for the recruiter workspace.
//!
//! This crate provides the `recruit_*` logging macros used across the codebase,
//! a host-side initializer with selectable destinations and a minimal test
//! initializer for the global logger.

use std::fs::File;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Log file used by [`LogDestination::default_file`].
pub const DEFAULT_LOG_FILE: &str = "./recruit.log";

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! recruit_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! recruit_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! recruit_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! recruit_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! recruit_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Destination for log output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogDestination {
    /// Write to a log file at the given path.
    File(PathBuf),
    /// Write to terminal (stdout/stderr).
    #[default]
    Terminal,
    /// Write to both the terminal and a log file.
    Both(PathBuf),
}

impl LogDestination {
    /// File-only logging to [`DEFAULT_LOG_FILE`] in the working directory.
    pub fn default_file() -> Self {
        LogDestination::File(PathBuf::from(DEFAULT_LOG_FILE))
    }
}

/// Initialize the global logger with the specified destination and level.
///
/// Returns `false` if a logger was already installed or no backend could be
/// created (e.g. the log file is not writable).
pub fn initialize(destination: LogDestination, level: LevelFilter) -> bool {
    let config = build_config();

    let loggers: Vec<Box<dyn SharedLogger>> = match destination {
        LogDestination::File(path) => match create_file_logger(&path, level, config) {
            Some(file_logger) => vec![file_logger],
            None => return false,
        },
        LogDestination::Terminal => vec![term_logger(level, config)],
        LogDestination::Both(path) => {
            let mut loggers: Vec<Box<dyn SharedLogger>> = vec![term_logger(level, config.clone())];
            if let Some(file_logger) = create_file_logger(&path, level, config) {
                loggers.push(file_logger);
            }
            loggers
        }
    };

    CombinedLogger::init(loggers).is_ok()
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn term_logger(level: LevelFilter, config: Config) -> Box<TermLogger> {
    TermLogger::new(level, config, TerminalMode::Mixed, ColorChoice::Auto)
}

fn create_file_logger(
    path: &Path,
    level: LevelFilter,
    config: Config,
) -> Option<Box<WriteLogger<File>>> {
    match File::create(path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_destination_is_terminal() {
        assert_eq!(LogDestination::default(), LogDestination::Terminal);
    }

    #[test]
    fn default_file_points_at_recruit_log() {
        assert_eq!(
            LogDestination::default_file(),
            LogDestination::File(PathBuf::from("./recruit.log"))
        );
    }

    #[test]
    fn test_initializer_is_idempotent() {
        initialize_for_tests();
        initialize_for_tests();
        recruit_info!("logger initialized twice without panicking");
    }

    #[test]
    fn unwritable_log_file_is_reported() {
        let path = PathBuf::from("/nonexistent-dir-for-recruit-logging/recruit.log");
        assert!(create_file_logger(&path, LevelFilter::Info, build_config()).is_none());
    }
}
