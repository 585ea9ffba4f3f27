//! Configuration to acknowledge user preferences as well as set defaults.
//!
//! Specifically, we try to find a worldbook.toml, and if present we load settings from there.
//! This provides the default output format and whether JSON is pretty-printed.

use crate::formats::OutputFormat;
use facet::Facet;
use std::fs;
use std::path::Path;
use tracing::warn;

/// File looked up in the working directory.
pub const CONFIG_FILE: &str = "worldbook.toml";

#[derive(Facet)]
/// Raw shape of worldbook.toml.
struct ConfigFile {
    #[facet(default = "json".to_string())]
    format: String,
    #[facet(default = true)]
    pretty: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// User preferences loaded from worldbook.toml or falling back to defaults.
pub struct Config {
    /// Output format when none is given on the command line.
    pub format: OutputFormat,
    /// Indent JSON output.
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            pretty: true,
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from worldbook.toml in the working directory if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, using defaults if it is missing or invalid.
    ///
    /// An unrecognised `format` is reported here and replaced by JSON; `pretty` is still honoured.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };
        let file = match facet_toml::from_str::<ConfigFile>(&contents) {
            Ok(file) => file,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring invalid configuration");
                return Self::default();
            }
        };

        let format = OutputFormat::from_name(&file.format).unwrap_or_else(|| {
            warn!(
                path = %path.display(),
                format = %file.format,
                "unknown output format, using json"
            );
            OutputFormat::Json
        });
        Self {
            format,
            pretty: file.pretty,
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
