//! worldbook: convert region and location notes into world book JSON.
//!
//! Notes are split into blocks on `---`; each block's `## Region` heading becomes an always-active
//! entry and each `### Location` heading below it becomes an entry keyed by both names.
//!
//! ```text
//! ---
//! ## China
//! *overview
//!
//! ### Beijing
//! *desc
//! ```
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod document;
pub mod entry;
pub mod error;
pub mod formats;
pub mod input;
pub mod parser;

pub use document::Document;
pub use entry::Entry;
pub use error::{Error, ParseError};
pub use parser::parse;
