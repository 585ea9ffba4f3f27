//! World book JSON, the format read by the downstream application.

use crate::document::Document;
use crate::error::Error;
use crate::formats::Format;

/// Serialises the document as `{ "entries": { "<uid>": ... } }`.
pub struct JsonFormat {
    /// Two-space indented output instead of a single line.
    pub pretty: bool,
}

impl Format for JsonFormat {
    fn name(&self) -> &'static str {
        "json"
    }

    fn file_extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, document: &Document) -> Result<String, Error> {
        let json = if self.pretty {
            serde_json::to_string_pretty(document)?
        } else {
            serde_json::to_string(document)?
        };
        Ok(json)
    }
}

/// Reads a world book back from JSON.
///
/// # Errors
///
/// Returns an error if `json` is not a world book document.
pub fn from_json(json: &str) -> Result<Document, Error> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
#[path = "../tests/json.rs"]
mod tests;
