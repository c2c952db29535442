//! Exit codes for the stretch-version CLI.
//!
//! The report is best-effort by contract: a missing or failing external
//! tool shows up as text in its section and never changes the exit code.
//! The only non-zero path is failing to write the report stream itself.
//!
//! Exit code ranges:
//! - 0: success
//! - 20-29: internal errors

/// Exit codes for stretch-version runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report completed (regardless of individual tool failures).
    Clean = 0,

    /// The report stream could not be written.
    IoError = 21,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Check if this exit code indicates an error.
    pub fn is_error(self) -> bool {
        (self as i32) >= 10
    }

    /// Get the code name as a string constant.
    pub fn code_name(&self) -> &'static str {
        match self {
            ExitCode::Clean => "OK_REPORT",
            ExitCode::IoError => "ERR_IO",
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code_name(), self.as_i32())
    }
}
