//! World book entries and the fixed configuration every entry carries.
//!
//! An entry is either a region (a `## ` heading and everything up to its first location) or a
//! location (a `### ` heading and its body). Only a handful of fields depend on the text; the
//! rest come from a single [`EntryConfig`] template so that every entry has the shape the
//! downstream world book reader expects. The nested `extensions` object repeats several of those
//! settings under their legacy names, and is always generated from the same template.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Where the downstream reader inserts the entry relative to the character definition.
pub enum Position {
    #[default]
    #[serde(rename = "before_char")]
    /// Insert before the character definition.
    BeforeChar,
}

impl Position {
    #[must_use]
    /// Numeric encoding used by the legacy `extensions` mirror.
    pub fn code(self) -> u8 {
        match self {
            Self::BeforeChar => 1,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
/// Activation settings shared by every entry, regardless of heading level.
pub struct EntryConfig {
    /// Secondary keywords; never derived from the text.
    pub keysecondary: Vec<String>,
    /// Whether the entry is matched by embedding rather than keyword.
    pub vectorized: bool,
    /// Whether secondary keys gate activation.
    pub selective: bool,
    /// Logic used to combine secondary keys.
    pub selective_logic: u8,
    /// Whether the label is kept as a memo.
    pub add_memo: bool,
    /// Insertion position relative to the character definition.
    pub position: Position,
    /// Disabled entries are never activated.
    pub disable: bool,
    /// Skip this entry during recursive scans.
    pub exclude_recursion: bool,
    /// Stop this entry from triggering recursive scans.
    pub prevent_recursion: bool,
    /// Hold activation until a recursive scan.
    pub delay_until_recursion: bool,
    /// Activation probability in percent.
    pub probability: u8,
    /// Whether `probability` is consulted at all.
    pub use_probability: bool,
    /// Insertion depth.
    pub depth: u32,
    /// Inclusion group name; empty means no group.
    pub group: String,
    /// Whether this entry wins its group outright.
    pub group_override: bool,
    /// Weight within the inclusion group.
    pub group_weight: u32,
    /// Per-entry scan depth; `None` defers to the reader's global setting.
    pub scan_depth: Option<u32>,
    /// Case-sensitive keyword matching.
    pub case_sensitive: bool,
    /// Whole-word keyword matching; `None` defers to the reader.
    pub match_whole_words: Option<bool>,
    /// Group scoring; `None` defers to the reader.
    pub use_group_scoring: Option<bool>,
    /// Automation hook identifier; empty means none.
    pub automation_id: String,
    /// Message role to insert as; `None` means the reader's default.
    pub role: Option<u8>,
    /// Turns the entry stays active after triggering.
    pub sticky: u32,
    /// Turns before the entry can trigger again.
    pub cooldown: u32,
    /// Turns to wait before the entry can first trigger.
    pub delay: u32,
}

impl Default for EntryConfig {
    fn default() -> Self {
        Self {
            keysecondary: Vec::new(),
            vectorized: false,
            selective: false,
            selective_logic: 0,
            add_memo: true,
            position: Position::BeforeChar,
            disable: false,
            exclude_recursion: false,
            prevent_recursion: false,
            delay_until_recursion: false,
            probability: 100,
            use_probability: true,
            depth: 4,
            group: String::new(),
            group_override: false,
            group_weight: 100,
            scan_depth: None,
            case_sensitive: false,
            match_whole_words: None,
            use_group_scoring: None,
            automation_id: String::new(),
            role: None,
            sticky: 0,
            cooldown: 0,
            delay: 0,
        }
    }
}

impl EntryConfig {
    #[must_use]
    /// Builds the legacy mirror of these settings for an entry at `display_index`.
    pub fn extensions(&self, display_index: u32) -> Extensions {
        Extensions {
            position: self.position.code(),
            exclude_recursion: self.exclude_recursion,
            display_index,
            probability: self.probability,
            use_probability: self.use_probability,
            depth: self.depth,
            selective_logic: self.selective_logic,
            group: self.group.clone(),
            group_override: self.group_override,
            group_weight: self.group_weight,
            prevent_recursion: self.prevent_recursion,
            delay_until_recursion: self.delay_until_recursion,
            scan_depth: self.scan_depth,
            match_whole_words: self.match_whole_words,
            use_group_scoring: self.use_group_scoring,
            case_sensitive: self.case_sensitive,
            automation_id: self.automation_id.clone(),
            role: self.role,
            vectorized: self.vectorized,
            sticky: self.sticky,
            cooldown: self.cooldown,
            delay: self.delay,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
/// Legacy snake-case mirror of [`EntryConfig`], nested under `extensions`.
pub struct Extensions {
    /// Numeric form of [`EntryConfig::position`].
    pub position: u8,
    /// Mirrors [`EntryConfig::exclude_recursion`].
    pub exclude_recursion: bool,
    /// Mirrors [`Entry::display_index`].
    pub display_index: u32,
    /// Mirrors [`EntryConfig::probability`].
    pub probability: u8,
    #[serde(rename = "useProbability")]
    /// Mirrors [`EntryConfig::use_probability`].
    pub use_probability: bool,
    /// Mirrors [`EntryConfig::depth`].
    pub depth: u32,
    #[serde(rename = "selectiveLogic")]
    /// Mirrors [`EntryConfig::selective_logic`].
    pub selective_logic: u8,
    /// Mirrors [`EntryConfig::group`].
    pub group: String,
    /// Mirrors [`EntryConfig::group_override`].
    pub group_override: bool,
    /// Mirrors [`EntryConfig::group_weight`].
    pub group_weight: u32,
    /// Mirrors [`EntryConfig::prevent_recursion`].
    pub prevent_recursion: bool,
    /// Mirrors [`EntryConfig::delay_until_recursion`].
    pub delay_until_recursion: bool,
    /// Mirrors [`EntryConfig::scan_depth`].
    pub scan_depth: Option<u32>,
    /// Mirrors [`EntryConfig::match_whole_words`].
    pub match_whole_words: Option<bool>,
    /// Mirrors [`EntryConfig::use_group_scoring`].
    pub use_group_scoring: Option<bool>,
    /// Mirrors [`EntryConfig::case_sensitive`].
    pub case_sensitive: bool,
    /// Mirrors [`EntryConfig::automation_id`].
    pub automation_id: String,
    /// Mirrors [`EntryConfig::role`].
    pub role: Option<u8>,
    /// Mirrors [`EntryConfig::vectorized`].
    pub vectorized: bool,
    /// Mirrors [`EntryConfig::sticky`].
    pub sticky: u32,
    /// Mirrors [`EntryConfig::cooldown`].
    pub cooldown: u32,
    /// Mirrors [`EntryConfig::delay`].
    pub delay: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// One world book record derived from a region or location section.
pub struct Entry {
    /// Position in parse order, starting from zero.
    pub uid: u32,
    /// Search keys: `[region]` for regions, `[location, region]` for locations.
    pub key: Vec<String>,
    /// Display label, the heading name.
    pub comment: String,
    /// Trimmed section text, heading line included.
    pub content: String,
    /// Always active; true only for region entries.
    pub constant: bool,
    /// Sort order, equal to `uid`.
    pub order: u32,
    /// Display order, equal to `uid`.
    pub display_index: u32,
    #[serde(flatten)]
    /// Fixed activation settings shared by all entries.
    pub config: EntryConfig,
    /// Legacy mirror generated from `config`.
    pub extensions: Extensions,
}

impl Entry {
    #[must_use]
    /// Merges the default template with the fields derived from the text.
    pub fn new(uid: u32, label: &str, body: &str, keys: Vec<String>, constant: bool) -> Self {
        let config = EntryConfig::default();
        let extensions = config.extensions(uid);
        Self {
            uid,
            key: keys,
            comment: label.to_string(),
            content: body.to_string(),
            constant,
            order: uid,
            display_index: uid,
            config,
            extensions,
        }
    }

    #[must_use]
    /// A region entry, keyed by its own name and always active.
    pub fn region(uid: u32, name: &str, body: &str) -> Self {
        Self::new(uid, name, body, vec![name.to_string()], true)
    }

    #[must_use]
    /// A location entry, keyed by its name and the name of the region containing it.
    pub fn location(uid: u32, name: &str, region: &str, body: &str) -> Self {
        Self::new(
            uid,
            name,
            body,
            vec![name.to_string(), region.to_string()],
            false,
        )
    }

    #[must_use]
    /// Whether this entry came from a region heading.
    pub fn is_region(&self) -> bool {
        self.constant
    }
}

#[cfg(test)]
#[path = "tests/entry.rs"]
mod tests;
