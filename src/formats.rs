//! Output formats for a parsed world book.
//!
//! This module defines the `Format` trait which abstracts over the ways a document can be
//! written out: the JSON world book consumed downstream, or a flattened plain-text preview.

pub mod json;
pub mod text;

use crate::document::Document;
use crate::error::Error;

/// Renders a [`Document`] into a string.
pub trait Format {
    /// Short name used on the command line and in `worldbook.toml`.
    fn name(&self) -> &'static str;

    /// File suffix for files written in this format.
    fn file_extension(&self) -> &'static str;

    /// Renders the document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be serialised.
    fn render(&self, document: &Document) -> Result<String, Error>;
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Output format selectable from the command line or configuration.
pub enum OutputFormat {
    #[default]
    /// World book JSON.
    Json,
    /// Flattened `[label]` / body preview.
    Text,
}

impl OutputFormat {
    #[must_use]
    /// Matches a configured format name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "text" | "txt" => Some(Self::Text),
            _ => None,
        }
    }

    #[must_use]
    /// The renderer for this format.
    pub fn formatter(self, pretty: bool) -> Box<dyn Format> {
        match self {
            Self::Json => Box::new(json::JsonFormat { pretty }),
            Self::Text => Box::new(text::TextFormat),
        }
    }
}
