use std::io::Write;
use std::sync::{Arc, Mutex};

use notes_core::control::{ControlError, NotesControlPlane, UpdateDatabaseRequest};
use notes_core::sink::{DatabaseSink, DatabaseWrite, SinkError, WriteReport};
use notes_core::store::NotesStore;
use notes_store::models::{CellValue, ConnectionDescriptor, UrlKind};

#[derive(Clone, Default)]
struct RecordingSink {
    writes: Arc<Mutex<Vec<DatabaseWrite>>>,
}

impl RecordingSink {
    fn writes(&self) -> Vec<DatabaseWrite> {
        self.writes.lock().expect("recording sink lock poisoned").clone()
    }
}

impl DatabaseSink for RecordingSink {
    async fn write_rows(&self, write: DatabaseWrite) -> Result<WriteReport, SinkError> {
        let rows_written = write.rows.len();
        self.writes
            .lock()
            .expect("recording sink lock poisoned")
            .push(write);
        Ok(WriteReport { rows_written })
    }
}

struct FailingSink;

impl DatabaseSink for FailingSink {
    async fn write_rows(&self, _write: DatabaseWrite) -> Result<WriteReport, SinkError> {
        Err(SinkError::Write("connection refused".to_string()))
    }
}

fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("inventory")
        .suffix(".csv")
        .tempfile()
        .unwrap_or_else(|err| panic!("failed to create csv fixture: {err}"));
    file.write_all(contents.as_bytes())
        .unwrap_or_else(|err| panic!("failed to write csv fixture: {err}"));
    file
}

#[tokio::test]
async fn csv_rows_reach_the_sink() {
    let fixture = write_fixture("sku,name,qty\nA-1,bolt,10\nA-2,nut,25\n");
    let sink = RecordingSink::default();
    let control = NotesControlPlane::new(NotesStore::new(), sink.clone());

    let report = control
        .update_database(UpdateDatabaseRequest {
            file_path: fixture.path().display().to_string(),
            database_type: "mongodb".to_string(),
            connection_string: "mongodb://host:27017/db".to_string(),
            table_name: "inventory".to_string(),
        })
        .await
        .expect("update should succeed");

    assert_eq!(report.row_count, 2);
    assert_eq!(report.rows_written, 2);
    assert_eq!(report.columns, vec!["name", "qty", "sku"]);
    assert_eq!(report.connection_kind, "mongodb");
    assert_eq!(report.table_name, "inventory");

    let writes = sink.writes();
    assert_eq!(writes.len(), 1);
    let write = &writes[0];
    assert_eq!(write.database_type, "mongodb");
    assert_eq!(
        write.connection,
        ConnectionDescriptor::Url {
            kind: UrlKind::Mongodb,
            url: "mongodb://host:27017/db".to_string(),
        }
    );
    assert_eq!(write.rows[1].get("name"), Some(&CellValue::from("nut")));
    assert_eq!(write.rows[1].get("qty"), Some(&CellValue::from("25")));
}

#[tokio::test]
async fn delimited_connection_string_is_forwarded_as_pairs() {
    let fixture = write_fixture("a,b\n1,2\n");
    let sink = RecordingSink::default();
    let control = NotesControlPlane::new(NotesStore::new(), sink.clone());

    control
        .update_database(UpdateDatabaseRequest {
            file_path: fixture.path().display().to_string(),
            database_type: "mssql".to_string(),
            connection_string: "Server=localhost;Database=test".to_string(),
            table_name: "pairs".to_string(),
        })
        .await
        .expect("update should succeed");

    let writes = sink.writes();
    assert_eq!(writes[0].connection.get("Server"), Some("localhost"));
    assert_eq!(writes[0].connection.get("Database"), Some("test"));
    assert_eq!(writes[0].rows.len(), 1);
}

#[tokio::test]
async fn sink_failures_surface_to_the_caller() {
    let fixture = write_fixture("a,b\n1,2\n");
    let control = NotesControlPlane::new(NotesStore::new(), FailingSink);

    let err = control
        .update_database(UpdateDatabaseRequest {
            file_path: fixture.path().display().to_string(),
            database_type: "postgres".to_string(),
            connection_string: "Host=db".to_string(),
            table_name: "t".to_string(),
        })
        .await
        .expect_err("sink failure should propagate");

    assert!(matches!(err, ControlError::Sink(SinkError::Write(_))));
    assert!(err.to_string().contains("connection refused"));
}
