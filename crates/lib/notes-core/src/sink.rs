//! Database sink seam.
//!
//! Ingestion hands parsed rows and connection parameters to a `DatabaseSink`.
//! The bundled `LoggingSink` records what it receives and writes nothing.

use std::{error::Error, fmt, future::Future};

use notes_store::models::{ConnectionDescriptor, RowRecord};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A batch of rows bound for a database table.
#[derive(Debug, Clone)]
pub struct DatabaseWrite {
    pub database_type: String,
    pub connection: ConnectionDescriptor,
    pub table_name: String,
    pub rows: Vec<RowRecord>,
}

/// Outcome reported by a sink after a write.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WriteReport {
    pub rows_written: usize,
}

#[derive(Debug)]
pub enum SinkError {
    Write(String),
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Write(message) => write!(f, "database write failed: {message}"),
        }
    }
}

impl Error for SinkError {}

/// Receives parsed rows for a target table.
pub trait DatabaseSink: Send + Sync + 'static {
    /// Writes a batch of rows.
    ///
    /// # Errors
    /// Returns `SinkError` if the sink rejects or fails to persist the batch.
    fn write_rows(
        &self,
        write: DatabaseWrite,
    ) -> impl Future<Output = Result<WriteReport, SinkError>> + Send;
}

/// Sink that logs each batch instead of writing it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSink;

impl DatabaseSink for LoggingSink {
    async fn write_rows(&self, write: DatabaseWrite) -> Result<WriteReport, SinkError> {
        info!(
            database_type = %write.database_type,
            table = %write.table_name,
            connection = write.connection.kind_label(),
            connection_keys = ?write.connection.keys(),
            rows = write.rows.len(),
            "received rows for database update"
        );
        for (index, row) in write.rows.iter().enumerate() {
            debug!(table = %write.table_name, index, ?row, "row");
        }
        Ok(WriteReport {
            rows_written: write.rows.len(),
        })
    }
}
