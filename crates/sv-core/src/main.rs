//! Stretch Version - robot diagnostic version report
//!
//! Prints software package versions, OS identity, firmware versions, and
//! the ROS workspace commit of a Stretch robot, for support and debugging.

use clap::Parser;
use sv_core::exit_codes::ExitCode;
use sv_core::logging::{init_logging, LogLevel};
use sv_core::report;
use tracing::error;

/// Print a diagnostic version report for a Stretch robot.
///
/// Runs the platform's version and firmware query tools in a fixed order
/// and streams their output to stdout. A missing tool is reported in place
/// and never aborts the rest of the report.
#[derive(Parser)]
#[command(name = "stretch-version")]
#[command(author, version, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log errors only
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.quiet {
        LogLevel::Error
    } else {
        match cli.verbose {
            0 => LogLevel::Info,
            1 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    };
    init_logging(log_level);

    let exit_code = match report::print_report() {
        Ok(()) => ExitCode::Clean,
        Err(err) => {
            error!(error = %err, "report aborted");
            ExitCode::IoError
        }
    };

    std::process::exit(exit_code.as_i32());
}
