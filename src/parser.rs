//! Parses region/location notes into a world book [`Document`].
//!
//! The grammar has three markers:
//!
//! ```text
//! ---                  separates blocks
//! ## Region(annotation) opens a block's region section
//! ### Location          opens a location section inside the block
//! ```
//!
//! Each block yields one region entry followed by one entry per location. Anything that does not
//! fit (a block without a region heading, a bare `###` line) is skipped, and only a document with
//! no entries at all is an error.

use crate::document::Document;
use crate::entry::Entry;
use crate::error::ParseError;
use tracing::debug;

/// Separator between top-level blocks.
pub const BLOCK_SEPARATOR: &str = "---";
/// Prefix of the line that names a block's region.
pub const REGION_MARKER: &str = "## ";
/// Prefix of the lines that open location sections.
pub const LOCATION_MARKER: &str = "###";

/// Parses `text` into a document, one region entry per block plus its locations.
///
/// Uids are assigned in the order entries are found, top to bottom, so each region precedes its
/// locations. Lines are expected to be `\n`-separated.
///
/// # Errors
///
/// Returns [`ParseError`] if no block produced any entry.
pub fn parse(text: &str) -> Result<Document, ParseError> {
    let mut document = Document::default();

    for (index, block) in text
        .split(BLOCK_SEPARATOR)
        .filter(|block| !block.trim().is_empty())
        .enumerate()
    {
        parse_block(block.trim(), &mut document);
        debug!(block = index, entries = document.len(), "parsed block");
    }

    if document.is_empty() {
        return Err(ParseError);
    }
    Ok(document)
}

fn parse_block(block: &str, document: &mut Document) {
    let mut sections = split_sections(block).into_iter();
    let Some(region_section) = sections.next().map(str::trim) else {
        return;
    };
    if region_section.is_empty() {
        return;
    }

    let Some(heading) = region_section
        .split('\n')
        .find(|line| line.starts_with(REGION_MARKER))
    else {
        debug!("skipping block without a region heading");
        return;
    };
    let Some(region) = region_name(heading) else {
        debug!(heading, "skipping block with an unnamed region");
        return;
    };

    document.push(Entry::region(document.next_uid(), region, region_section));

    for section in sections.map(str::trim) {
        let heading = section.split('\n').next().unwrap_or_default();
        match location_name(heading) {
            Some(location) => {
                document.push(Entry::location(
                    document.next_uid(),
                    location,
                    region,
                    section,
                ));
            }
            None => debug!(heading, region, "skipping malformed location heading"),
        }
    }
}

/// Splits a block at every location heading that starts a line after the first.
///
/// The first slice is the region section; each later slice starts at its heading.
fn split_sections(block: &str) -> Vec<&str> {
    let mut sections = Vec::new();
    let mut start = 0;
    let mut offset = 0;

    for line in block.split_inclusive('\n') {
        if offset > 0 && opens_location(line) {
            sections.push(&block[start..offset]);
            start = offset;
        }
        offset += line.len();
    }
    sections.push(&block[start..]);
    sections
}

/// Whether `line` (with its line terminator, if any) opens a location section.
fn opens_location(line: &str) -> bool {
    line.strip_prefix(LOCATION_MARKER)
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_whitespace)
}

/// Region name from a `## ` heading: the first run of characters that are neither
/// whitespace nor `(`, so `## Region(north) notes` names `Region`.
fn region_name(heading: &str) -> Option<&str> {
    let rest = heading.strip_prefix("##")?.trim_start();
    let end = rest
        .find(|c: char| c.is_whitespace() || c == '(')
        .unwrap_or(rest.len());
    let name = rest[..end].trim();
    (!name.is_empty()).then_some(name)
}

/// Location name from a `### ` heading: everything after the marker, trimmed.
///
/// The marker must be followed by whitespace and at least one more character on the line, so
/// `###  ` names an empty location while a bare `###` or `### ` is not a heading.
fn location_name(heading: &str) -> Option<&str> {
    let rest = heading.strip_prefix(LOCATION_MARKER)?;
    let mut chars = rest.chars();
    if !chars.next().is_some_and(char::is_whitespace) || chars.next().is_none() {
        return None;
    }
    Some(rest.trim())
}

#[cfg(test)]
#[path = "tests/parser.rs"]
mod tests;
