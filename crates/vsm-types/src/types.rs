use serde::{Deserialize, Serialize};

/// Metadata of a dictionary served by an adapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictInfo {
    pub id: String,
    pub abbrev: String,
    pub name: String,
}

/// One synonym/term string of an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub str: String,
}

impl Term {
    pub fn new(s: impl Into<String>) -> Self {
        Self { str: s.into() }
    }
}

/// Dictionary-specific extra data, serialized as `z`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryExtra {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
}

/// A concept with its terms. `terms[0]` is the preferred term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    #[serde(rename = "dictID")]
    pub dict_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descr: Option<String>,
    pub terms: Vec<Term>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<EntryExtra>,
}

impl Entry {
    /// The preferred term, empty if the entry has no terms
    pub fn preferred_term(&self) -> &str {
        self.terms.first().map(|t| t.str.as_str()).unwrap_or_default()
    }
}

/// Match class of a string match, serialized as its letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchType {
    /// Match found by free-text search, not necessarily a prefix
    T,
}

/// An entry that matched a search string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    #[serde(rename = "dictID")]
    pub dict_id: String,
    pub str: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descr: Option<String>,
    #[serde(rename = "type")]
    pub match_type: MatchType,
    pub terms: Vec<Term>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<EntryExtra>,
}

impl Match {
    pub fn from_entry(entry: Entry, str: String, match_type: MatchType) -> Self {
        Self {
            id: entry.id,
            dict_id: entry.dict_id,
            str,
            descr: entry.descr,
            match_type,
            terms: entry.terms,
            z: entry.z,
        }
    }
}

/// Result payload of every dictionary query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Items<T> {
    pub items: Vec<T>,
}

impl<T> Items<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }
}
