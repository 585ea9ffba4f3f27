//! Flattened plain-text preview of a world book.
//!
//! Each entry becomes its label in brackets followed by its body, in uid order, with a blank
//! line between entries.

use crate::document::Document;
use crate::error::Error;
use crate::formats::Format;

/// Renders entries as `[label]` followed by the entry body.
pub struct TextFormat;

impl Format for TextFormat {
    fn name(&self) -> &'static str {
        "text"
    }

    fn file_extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, document: &Document) -> Result<String, Error> {
        Ok(flatten(document))
    }
}

#[must_use]
/// Joins every entry's `[label]\nbody` with blank lines, in uid order.
pub fn flatten(document: &Document) -> String {
    let mut preview = String::new();
    for (i, entry) in document.entries().iter().enumerate() {
        if i > 0 {
            preview.push_str("\n\n");
        }
        preview.push('[');
        preview.push_str(&entry.comment);
        preview.push_str("]\n");
        preview.push_str(&entry.content);
    }
    preview
}

#[cfg(test)]
#[path = "../tests/text.rs"]
mod tests;
