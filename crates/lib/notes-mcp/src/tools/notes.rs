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

/// Parameters for creating a note.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CreateNoteParams {
    /// Title of the note
    pub title: String,
    /// Text content of the note
    pub content: String,
}

#[tool_router(router = tool_router_notes, vis = "pub")]
impl<S: DatabaseSink> NotesMcp<S> {
    #[tool(description = "Create a new note")]
    async fn create_note(
        &self,
        Parameters(params): Parameters<CreateNoteParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let id = self
            .control
            .create_note(&params.title, &params.content)
            .await
            .map_err(helpers::map_err)?;
        Ok(CallToolResult::success(vec![Content::text(format!(
            "Created note {id}: {}",
            params.title
        ))]))
    }
}
