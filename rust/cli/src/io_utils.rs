//! Line-oriented input for the interactive `play` command.

use std::io::BufRead;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Returns the trimmed line, or `None` on EOF or a read error so callers can
/// treat a closed stdin like a quit.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use callbreak_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  AS \n");
/// assert_eq!(read_stdin_line(&mut input).as_deref(), Some("AS"));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(e) => {
            tracing::warn!(error = %e, "stdin read failed");
            None
        }
    }
}
