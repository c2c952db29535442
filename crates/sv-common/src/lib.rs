//! Stretch version report common types.
//!
//! This crate provides the foundation shared across the report tool:
//! - The report section model and the fixed ordered section table
//! - Common error types
//!
//! The binary entry point lives in `sv-core`.

pub mod error;
pub mod section;

pub use error::{Error, Result};
pub use section::{report_sections, sections_for_home, Section, SECTION_SEPARATOR};
