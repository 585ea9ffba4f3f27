//! Reading notes in and writing world books out.
//!
//! The parser expects `\n`-separated text, so line endings are normalised here on the way in.

use crate::formats::Format;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Base name of files written into an output directory.
pub const DEFAULT_OUTPUT_STEM: &str = "worldbook";

/// Reads the source text from `path`, or from stdin when `path` is `None` or `-`.
///
/// # Errors
///
/// Returns an error if the file or stdin cannot be read as UTF-8.
pub fn read_source(path: Option<&Path>) -> io::Result<String> {
    let raw = match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(normalize_line_endings(&raw))
}

#[must_use]
/// Converts `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[must_use]
/// Resolves where output goes: a directory gets `worldbook.<ext>` inside it.
pub fn output_path(path: &Path, format: &dyn Format) -> PathBuf {
    if path.is_dir() {
        path.join(format!("{DEFAULT_OUTPUT_STEM}.{}", format.file_extension()))
    } else {
        path.to_path_buf()
    }
}

/// Writes `contents` to `path`, or to stdout with a trailing newline when `path` is `None`.
///
/// # Errors
///
/// Returns an error if the file or stdout cannot be written.
pub fn write_output(path: Option<&Path>, contents: &str) -> io::Result<()> {
    if let Some(path) = path {
        fs::write(path, contents)
    } else {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{contents}")?;
        stdout.flush()
    }
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
