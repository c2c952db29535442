//! Logging for the stretch-version CLI.
//!
//! stdout is reserved for the report itself; all log output goes to
//! stderr. The default level keeps the report byte-for-byte free of log
//! noise (report progress is logged at debug).
//!
//! Filtering is configurable via the SV_LOG or RUST_LOG environment
//! variables, falling back to the level derived from the CLI flags.

use std::io::IsTerminal;
use tracing_subscriber::{fmt, EnvFilter};

/// Log level filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Most verbose.
    Trace,
    /// Debug information.
    Debug,
    /// Standard operational info (default).
    #[default]
    Info,
    /// Warnings only.
    Warn,
    /// Errors only.
    Error,
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("unknown log level: {}", s)),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

/// Initialize the logging subsystem.
///
/// Must be called once at startup before any logging occurs. Respects the
/// SV_LOG and RUST_LOG environment variables.
pub fn init_logging(level: LogLevel) {
    let filter = EnvFilter::try_from_env("SV_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(format!("sv_core={level},sv_common={level}")));

    let use_ansi = std::io::stderr().is_terminal();

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(use_ansi)
        .init();
}
