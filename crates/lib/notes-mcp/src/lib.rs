//! MCP server implementation for notes-mcp.
//!
//! This crate wires the notes control plane into an rmcp `ServerHandler`:
//! notes are exposed as resources, `create_note` and `update_database` as
//! tools, and `summarize_notes` as a prompt.

mod helpers;
mod prompts;
mod resources;
mod tools;
pub mod server;

use notes_core::control::NotesControlPlane;
use notes_core::sink::DatabaseSink;
use notes_core::store::NotesStore;
use rmcp::{
    ErrorData,
    RoleServer,
    ServerHandler,
    handler::server::tool::{ToolCallContext, ToolRouter},
    service::RequestContext,
};
use rmcp::model::{
    CallToolRequestParams,
    CallToolResult,
    ErrorCode,
    GetPromptRequestParams,
    GetPromptResult,
    ListPromptsResult,
    ListResourcesResult,
    ListToolsResult,
    PaginatedRequestParams,
    ReadResourceRequestParams,
    ReadResourceResult,
    ServerCapabilities,
    ServerInfo,
};

pub use tools::{CreateNoteParams, UpdateDatabaseParams};

const SERVER_INSTRUCTIONS: &str = r"notes-mcp keeps a small in-memory collection of text notes and can load tabular files into a database.

Resources:
- Every note is a `text/plain` resource at `note:///{id}`. Ids are assigned in creation order starting at 1.

Tools:
- `create_note(title, content)` stores a new note and returns its id.
- `update_database(filePath, databaseType, connectionString, tableName)` reads a `.csv`, `.xlsx` or `.xls`
  file (first sheet only for spreadsheets) and forwards the rows to the database sink.
  `connectionString` is either a `mongodb://` URL or `key=value;key=value` pairs.

Prompts:
- `summarize_notes` embeds every note and asks for a summary.";

/// MCP server wrapper around the notes control plane and tool router.
pub struct NotesMcp<S: DatabaseSink> {
    tool_router: ToolRouter<Self>,
    control: NotesControlPlane<S>,
}

impl<S: DatabaseSink> Clone for NotesMcp<S> {
    fn clone(&self) -> Self {
        Self {
            tool_router: self.tool_router.clone(),
            control: self.control.clone(),
        }
    }
}

impl<S: DatabaseSink> NotesMcp<S> {
    /// Creates a new server owning a store and sink.
    #[must_use]
    pub fn new(store: NotesStore, sink: S) -> Self {
        Self::with_control(NotesControlPlane::new(store, sink))
    }

    /// Creates a new server over an existing control plane handle.
    #[must_use]
    pub fn with_control(control: NotesControlPlane<S>) -> Self {
        let tool_router = Self::tool_router_notes() + Self::tool_router_database();
        Self {
            tool_router,
            control,
        }
    }

    fn ensure_tool(&self, name: &str) -> Result<(), ErrorData> {
        if self.tool_router.has_route(name) {
            Ok(())
        } else {
            Err(helpers::mcp_err(
                ErrorCode::METHOD_NOT_FOUND,
                format!("Unknown tool: {name}"),
            ))
        }
    }
}

impl<S: DatabaseSink> ServerHandler for NotesMcp<S> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(self.tool_router.list_all()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        self.ensure_tool(&request.name)?;
        let call = ToolCallContext::new(self, request, context);
        self.tool_router.call(call).await
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        Ok(ListResourcesResult::with_all_items(self.note_resources().await))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        self.read_note(&request.uri).await
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, ErrorData> {
        Ok(ListPromptsResult::with_all_items(prompts::prompt_descriptors()))
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, ErrorData> {
        self.render_prompt(&request.name).await
    }
}
