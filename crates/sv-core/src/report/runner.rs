//! Section runner: one external command per report section.
//!
//! Two execution modes:
//! - Passthrough: the child inherits stdout and stderr and its output
//!   lands in the report directly.
//! - Filtered: the child's stdout is piped and only lines containing one
//!   of the section's filter substrings are copied through; stderr stays
//!   inherited.
//!
//! A spawn failure is report content, not an error: the runner prints a
//! shell-style message on stderr and the section is done. There is no
//! timeout and no retry; a hung tool blocks the report.

use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::process::{Command, Stdio};

use sv_common::{Error, Result, Section};
use tracing::debug;

/// Run one section's command to completion.
pub fn run_section<W: Write>(out: &mut W, section: &Section) -> Result<()> {
    let mut command = Command::new(section.program);
    command.args(section.args).stdin(Stdio::null());
    if let Some(dir) = &section.workdir {
        command.current_dir(dir);
    }

    match section.filter {
        None => run_passthrough(out, section, command),
        Some(filters) => run_filtered(out, section, command, filters),
    }
}

fn run_passthrough<W: Write>(out: &mut W, section: &Section, mut command: Command) -> Result<()> {
    command.stdout(Stdio::inherit()).stderr(Stdio::inherit());

    // The header must reach the descriptor before the child writes to it.
    out.flush()?;

    match command.status() {
        Ok(status) => {
            debug!(command = section.program, code = ?status.code(), "section command finished");
            Ok(())
        }
        Err(err) => {
            report_spawn_failure(section.program, &err);
            Ok(())
        }
    }
}

fn run_filtered<W: Write>(
    out: &mut W,
    section: &Section,
    mut command: Command,
    filters: &[&str],
) -> Result<()> {
    command.stdout(Stdio::piped()).stderr(Stdio::inherit());
    out.flush()?;

    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(err) => {
            report_spawn_failure(section.program, &err);
            return Ok(());
        }
    };

    let copied = match child.stdout.take() {
        Some(pipe) => copy_matching_lines(BufReader::new(pipe), out, filters),
        None => Ok(()),
    };

    // Reap the child on every path, including a failed copy. Dropping the
    // pipe above unblocks a child still writing.
    let waited = child.wait().map_err(|source| Error::Wait {
        command: section.program.to_string(),
        source,
    });

    copied?;
    let status = waited?;
    debug!(command = section.program, code = ?status.code(), "section command finished");
    Ok(())
}

fn copy_matching_lines<R: BufRead, W: Write>(
    mut reader: R,
    out: &mut W,
    filters: &[&str],
) -> Result<()> {
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(());
        }
        if line_matches(&line, filters) {
            out.write_all(&line)?;
        }
    }
}

/// Substring match on a lossy UTF-8 view; the original bytes are what get
/// written through.
fn line_matches(line: &[u8], filters: &[&str]) -> bool {
    let text = String::from_utf8_lossy(line);
    filters.iter().any(|needle| text.contains(needle))
}

fn report_spawn_failure(program: &str, err: &std::io::Error) {
    if err.kind() == ErrorKind::NotFound {
        eprintln!("stretch-version: {program}: command not found");
    } else {
        eprintln!("stretch-version: {program}: {err}");
    }
}
