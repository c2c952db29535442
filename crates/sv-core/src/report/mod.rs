//! Report generator.
//!
//! The report is a single linear pass over the fixed section table: for
//! each section, a separator line, a `# <label>` header, then the external
//! command's output. One trailing separator closes the report.
//!
//! Sections run strictly in order and each command runs to completion
//! before the next section starts. A missing or failing tool never aborts
//! the pass; its section simply shows whatever error text surfaced.

pub mod runner;

use std::io::{self, Write};
use sv_common::{report_sections, Result, SECTION_SEPARATOR};
use tracing::{debug, warn};

/// Print the full version report to the process stdout.
pub fn print_report() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out)
}

/// Emit every section of the report.
///
/// Separators, headers, and filtered package lines go through `out`;
/// passthrough sections stream child output on the inherited descriptors.
/// Only report-stream failures propagate; section failures are logged and
/// the loop continues.
pub fn write_report<W: Write>(out: &mut W) -> Result<()> {
    for section in report_sections() {
        debug!(section = section.label, "running report section");
        writeln!(out, "{SECTION_SEPARATOR}")?;
        writeln!(out, "# {}", section.label)?;
        if let Err(err) = runner::run_section(out, &section) {
            warn!(section = section.label, error = %err, "report section failed");
        }
    }
    writeln!(out, "{SECTION_SEPARATOR}")?;
    out.flush()?;
    Ok(())
}
