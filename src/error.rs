//! Errors raised while turning notes into a world book.
//!
//! The parser itself only ever fails one way: nothing in the text looked like a region. The
//! command-line front end adds the I/O and serialisation failures around it.

use std::io;

/// Guidance shown when no entry could be recognised in the input.
pub const GUIDANCE: &str = "Parse failed. Make sure the text is formatted correctly: separate \
regions with `---`, give each region a `## Region` heading, and give each location a \
`### Location` heading.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", GUIDANCE)]
/// No region or location entry could be extracted from any block of the input.
pub struct ParseError;

#[derive(Debug, thiserror::Error)]
/// Failures surfaced by the command-line front end.
pub enum Error {
    /// The input did not contain any recognisable entry.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Rendering or reading world book JSON failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading the source text or writing the output failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
