//! Small helpers for messages written to the error stream.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Writes `prompt` without a newline and flushes so it shows before input.
pub fn prompt(out: &mut dyn Write, prompt: &str) -> std::io::Result<()> {
    write!(out, "{}", prompt)?;
    out.flush()
}
