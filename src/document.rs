//! The world book document: every entry produced by one parse.
//!
//! On the wire a document is `{ "entries": { "<uid>": <entry>, ... } }`. In memory the entries
//! are held in discovery order, which is also uid order, so serialising emits the keys in the
//! order a reader would sort them and lookups by uid are a direct index. Reading a document back
//! rejects keys that disagree with their entry's uid and uids that are not contiguous from zero.

use crate::entry::Entry;
use serde::de::{Deserializer, Error as _};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Ordered collection of entries produced by a single parse.
pub struct Document {
    entries: Vec<Entry>,
}

impl Document {
    pub(crate) fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    #[must_use]
    /// Next unused uid.
    pub fn next_uid(&self) -> u32 {
        self.entries.last().map_or(0, |entry| entry.uid + 1)
    }

    #[must_use]
    /// Entries in uid order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    /// Looks an entry up by uid.
    pub fn get(&self, uid: u32) -> Option<&Entry> {
        self.entries
            .binary_search_by_key(&uid, |entry| entry.uid)
            .ok()
            .map(|index| &self.entries[index])
    }

    #[must_use]
    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    /// Whether the document has no entries. A successful parse never returns one.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Region entries, in uid order.
    pub fn regions(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|entry| entry.is_region())
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

struct EntryMap<'a>(&'a [Entry]);

impl Serialize for EntryMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in self.0 {
            map.serialize_entry(&entry.uid.to_string(), entry)?;
        }
        map.end()
    }
}

#[derive(Serialize)]
struct DocumentRef<'a> {
    entries: EntryMap<'a>,
}

#[derive(Deserialize)]
struct DocumentOwned {
    entries: HashMap<String, Entry>,
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        DocumentRef {
            entries: EntryMap(&self.entries),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let owned = DocumentOwned::deserialize(deserializer)?;
        let mut entries = Vec::with_capacity(owned.entries.len());
        for (key, entry) in owned.entries {
            if key != entry.uid.to_string() {
                return Err(D::Error::custom(format!(
                    "entry under key \"{key}\" has uid {}",
                    entry.uid
                )));
            }
            entries.push(entry);
        }
        entries.sort_by_key(|entry| entry.uid);

        // Keys are unique, so sorted uids must be exactly 0..n.
        if let Some((expected, entry)) = entries
            .iter()
            .enumerate()
            .find(|(i, entry)| usize::try_from(entry.uid).ok() != Some(*i))
        {
            return Err(D::Error::custom(format!(
                "uids are not contiguous: expected {expected}, found {}",
                entry.uid
            )));
        }
        Ok(Self { entries })
    }
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
