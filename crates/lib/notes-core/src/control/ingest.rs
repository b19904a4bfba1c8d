use std::collections::BTreeSet;
use std::path::PathBuf;

use notes_store::models::RowRecord;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::parsers::{ConnectionStringParser, FileKind, TabularParser};
use crate::sink::{DatabaseSink, DatabaseWrite};

use super::{ControlError, NotesControlPlane};

/// Input payload for loading a tabular file into a database table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDatabaseRequest {
    pub file_path: String,
    pub database_type: String,
    pub connection_string: String,
    pub table_name: String,
}

impl UpdateDatabaseRequest {
    fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("filePath", &self.file_path),
            ("databaseType", &self.database_type),
            ("connectionString", &self.connection_string),
            ("tableName", &self.table_name),
        ]
        .into_iter()
        // Whitespace-only values count as missing, same as note fields.
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Summary of a database update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateDatabaseReport {
    pub database_type: String,
    pub table_name: String,
    pub connection_kind: String,
    pub row_count: usize,
    pub rows_written: usize,
    pub columns: Vec<String>,
}

impl<S: DatabaseSink> NotesControlPlane<S> {
    /// Parses a tabular file and forwards its rows to the database sink.
    ///
    /// All fields are validated and the file type is checked before the file
    /// is opened. The report is produced only after parsing and the sink write
    /// have both finished.
    ///
    /// # Errors
    /// Returns `ControlError::InvalidInput` for missing fields,
    /// `ControlError::Parse` for an unsupported or unreadable file, and
    /// `ControlError::Sink` if the sink rejects the batch.
    pub async fn update_database(
        &self,
        request: UpdateDatabaseRequest,
    ) -> Result<UpdateDatabaseReport, ControlError> {
        let missing = request.missing_fields();
        if !missing.is_empty() {
            return Err(ControlError::InvalidInput(format!(
                "Missing required parameters: {}",
                missing.join(", ")
            )));
        }

        let UpdateDatabaseRequest {
            file_path,
            database_type,
            connection_string,
            table_name,
        } = request;

        let path = PathBuf::from(file_path.trim());
        FileKind::from_path(&path)?;

        let rows = TabularParser::parse_async(path.clone()).await?;
        let connection = ConnectionStringParser::parse(&connection_string);
        let columns = collect_columns(&rows);
        let row_count = rows.len();
        let connection_kind = connection.kind_label().to_string();

        info!(
            path = %path.display(),
            database_type = %database_type,
            table = %table_name,
            rows = row_count,
            "forwarding parsed rows to database sink"
        );

        let written = self
            .sink
            .write_rows(DatabaseWrite {
                database_type: database_type.clone(),
                connection,
                table_name: table_name.clone(),
                rows,
            })
            .await?;

        Ok(UpdateDatabaseReport {
            database_type,
            table_name,
            connection_kind,
            row_count,
            rows_written: written.rows_written,
            columns,
        })
    }
}

fn collect_columns(rows: &[RowRecord]) -> Vec<String> {
    rows.iter()
        .flat_map(|row| row.keys().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
