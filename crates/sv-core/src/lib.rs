//! Stretch Version Core Library
//!
//! This library provides the pieces behind the `stretch-version` binary:
//! - Exit codes for the CLI
//! - Logging setup
//! - The report generator and section runner
//!
//! The binary entry point is in `main.rs`.

pub mod exit_codes;
pub mod logging;
pub mod report;
