use std::collections::BTreeMap;

use notes_store::models::{ConnectionDescriptor, UrlKind};
use url::Url;

/// Shape of a connection string, decided before any decoding happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionForm {
    Url(UrlKind),
    Delimited,
}

/// Best-effort decoder for connection strings.
///
/// Recognizes `mongodb://` URLs and otherwise treats the input as
/// `key=value;key=value`. There is no escaping or quoting; segments without a
/// key are dropped and later duplicates win.
pub struct ConnectionStringParser;

impl ConnectionStringParser {
    #[must_use]
    pub fn classify(text: &str) -> ConnectionForm {
        match Url::parse(text) {
            Ok(url) if url.scheme() == UrlKind::Mongodb.as_str() => {
                ConnectionForm::Url(UrlKind::Mongodb)
            }
            _ => ConnectionForm::Delimited,
        }
    }

    #[must_use]
    pub fn parse(text: &str) -> ConnectionDescriptor {
        match Self::classify(text) {
            ConnectionForm::Url(kind) => ConnectionDescriptor::Url {
                kind,
                url: text.to_string(),
            },
            ConnectionForm::Delimited => ConnectionDescriptor::Pairs(parse_pairs(text)),
        }
    }
}

fn parse_pairs(text: &str) -> BTreeMap<String, String> {
    text.split(';')
        .filter_map(|segment| segment.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
