//! Parsers for ingestion inputs.
//!
//! The tabular parser turns delimited and spreadsheet files into row records;
//! the connection parser decodes caller-supplied connection strings.

pub mod connection;
pub mod tabular;

pub use connection::{ConnectionForm, ConnectionStringParser};
pub use tabular::{FileKind, TabularParseError, TabularParser};
