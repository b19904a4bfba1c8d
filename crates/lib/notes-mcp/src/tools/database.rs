use notes_core::control::UpdateDatabaseRequest;
use notes_core::sink::DatabaseSink;
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::{NotesMcp, helpers};

/// Parameters for loading a tabular file into a database table.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDatabaseParams {
    /// Path to the CSV or Excel file
    pub file_path: String,
    /// Type of database (e.g., mongodb, postgres, mysql)
    pub database_type: String,
    /// Database connection string
    pub connection_string: String,
    /// Name of the table/collection to update
    pub table_name: String,
}

impl From<UpdateDatabaseParams> for UpdateDatabaseRequest {
    fn from(params: UpdateDatabaseParams) -> Self {
        Self {
            file_path: params.file_path,
            database_type: params.database_type,
            connection_string: params.connection_string,
            table_name: params.table_name,
        }
    }
}

#[tool_router(router = tool_router_database, vis = "pub")]
impl<S: DatabaseSink> NotesMcp<S> {
    #[tool(description = "Update database with data from CSV or Excel file")]
    async fn update_database(
        &self,
        Parameters(params): Parameters<UpdateDatabaseParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let report = self
            .control
            .update_database(params.into())
            .await
            .map_err(helpers::map_err)?;
        Ok(CallToolResult::success(vec![Content::json(report)?]))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use notes_core::sink::LoggingSink;
    use notes_core::store::NotesStore;
    use rmcp::model::ErrorCode;

    use super::*;

    fn params(file_path: &str, database_type: &str) -> Parameters<UpdateDatabaseParams> {
        Parameters(UpdateDatabaseParams {
            file_path: file_path.to_string(),
            database_type: database_type.to_string(),
            connection_string: "Server=localhost;Database=test".to_string(),
            table_name: "items".to_string(),
        })
    }

    #[test]
    fn schema_uses_camel_case_fields() {
        let schema = serde_json::to_value(schemars::schema_for!(UpdateDatabaseParams))
            .expect("schema should serialize");

        let required: Vec<&str> = schema["required"]
            .as_array()
            .expect("schema should list required fields")
            .iter()
            .filter_map(serde_json::Value::as_str)
            .collect();
        for field in ["filePath", "databaseType", "connectionString", "tableName"] {
            assert!(required.contains(&field), "{field} should be required");
        }
    }

    #[tokio::test]
    async fn missing_database_type_is_invalid_params() {
        let server = NotesMcp::new(NotesStore::new(), LoggingSink);

        let err = server
            .update_database(params("x.csv", ""))
            .await
            .expect_err("missing databaseType should be rejected");

        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn unsupported_extension_is_invalid_params() {
        let server = NotesMcp::new(NotesStore::new(), LoggingSink);

        let err = server
            .update_database(params("data.txt", "postgres"))
            .await
            .expect_err("txt should be rejected");

        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn unreadable_file_is_internal_error() {
        let server = NotesMcp::new(NotesStore::new(), LoggingSink);
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("gone.xlsx");

        let err = server
            .update_database(params(&path.display().to_string(), "postgres"))
            .await
            .expect_err("missing workbook should fail");

        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
        assert!(err.message.starts_with("Failed to process file"));
    }

    #[tokio::test]
    async fn csv_update_returns_report() {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("failed to create temp file");
        file.write_all(b"a,b\n1,2\n").expect("failed to write temp file");
        let server = NotesMcp::new(NotesStore::new(), LoggingSink);

        let result = server
            .update_database(params(&file.path().display().to_string(), "postgres"))
            .await
            .expect("update should succeed");

        let value = serde_json::to_value(&result).expect("result should serialize");
        let text = value["content"][0]["text"]
            .as_str()
            .expect("report should be text content");
        let report: serde_json::Value =
            serde_json::from_str(text).expect("report should be JSON");
        assert_eq!(report["row_count"], 1);
        assert_eq!(report["connection_kind"], "key_value");
        assert_eq!(report["columns"], serde_json::json!(["a", "b"]));
    }
}
