use std::{error::Error, fmt, sync::Arc};

use tokio::sync::RwLock;

use crate::parsers::TabularParseError;
use crate::sink::{DatabaseSink, SinkError};
use crate::store::{NotesStore, StoreError};

pub mod ingest;
pub mod notes;

pub use ingest::{UpdateDatabaseReport, UpdateDatabaseRequest};

#[derive(Debug)]
pub enum ControlError {
    InvalidInput(String),
    Store(StoreError),
    Parse(TabularParseError),
    Sink(SinkError),
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(message) => write!(f, "invalid input: {message}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Parse(err) => write!(f, "{err}"),
            Self::Sink(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ControlError {}

impl From<StoreError> for ControlError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl From<TabularParseError> for ControlError {
    fn from(err: TabularParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<SinkError> for ControlError {
    fn from(err: SinkError) -> Self {
        Self::Sink(err)
    }
}

/// Transport-independent surface for every server operation.
pub struct NotesControlPlane<S: DatabaseSink> {
    store: Arc<RwLock<NotesStore>>,
    sink: Arc<S>,
}

impl<S: DatabaseSink> Clone for NotesControlPlane<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            sink: self.sink.clone(),
        }
    }
}

impl<S: DatabaseSink> NotesControlPlane<S> {
    pub fn new(store: NotesStore, sink: S) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            sink: Arc::new(sink),
        }
    }
}
