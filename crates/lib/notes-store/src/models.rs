use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A text note held by the notes store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Note {
    pub title: String,
    pub content: String,
}

impl Note {
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// A note together with the identifier it was stored under.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteEntry {
    pub id: String,
    pub note: Note,
}

/// A single parsed cell from a tabular file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One parsed row keyed by column header.
pub type RowRecord = BTreeMap<String, CellValue>;

/// Scheme recognized in URL-form connection strings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UrlKind {
    Mongodb,
}

impl UrlKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mongodb => "mongodb",
        }
    }
}

/// Structured form of a caller-supplied connection string.
///
/// Serializes as `{"type": "mongodb", "url": ...}` for URL-form input and as a
/// flat object of key/value pairs for delimited input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ConnectionDescriptor {
    Url {
        #[serde(rename = "type")]
        kind: UrlKind,
        url: String,
    },
    Pairs(BTreeMap<String, String>),
}

impl ConnectionDescriptor {
    /// Short label for logs and reports.
    #[must_use]
    pub const fn kind_label(&self) -> &'static str {
        match self {
            Self::Url { kind, .. } => kind.as_str(),
            Self::Pairs(_) => "key_value",
        }
    }

    /// Key names present in the descriptor, without their values.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        match self {
            Self::Url { .. } => vec!["type", "url"],
            Self::Pairs(pairs) => pairs.keys().map(String::as_str).collect(),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        match self {
            Self::Url { kind, url } => match key {
                "type" => Some(kind.as_str()),
                "url" => Some(url),
                _ => None,
            },
            Self::Pairs(pairs) => pairs.get(key).map(String::as_str),
        }
    }
}
