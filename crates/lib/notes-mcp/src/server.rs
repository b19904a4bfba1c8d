//! MCP server runners for notes-mcp.
//!
//! stdio serves a single client. Streamable HTTP serves many sessions, each
//! with its own `NotesMcp` handle over one shared control plane, so a note
//! created in one session is visible to every other.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use notes_core::control::NotesControlPlane;
use notes_core::sink::DatabaseSink;
use rmcp::serve_server;
use rmcp::transport::io::stdio;
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig,
    StreamableHttpService,
    session::local::LocalSessionManager,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::NotesMcp;

pub const DEFAULT_MCP_HTTP_ADDR: &str = "127.0.0.1:4030";

/// Configuration for the MCP streamable HTTP server.
#[derive(Debug, Clone)]
pub struct McpHttpServerConfig {
    pub addr: SocketAddr,
    pub stateful_mode: bool,
    pub sse_keep_alive: Option<Duration>,
}

impl McpHttpServerConfig {
    #[must_use]
    pub const fn new(addr: SocketAddr) -> Self {
        Self {
            addr,
            stateful_mode: true,
            sse_keep_alive: Some(Duration::from_secs(15)),
        }
    }

    #[must_use]
    pub const fn with_stateful_mode(mut self, stateful_mode: bool) -> Self {
        self.stateful_mode = stateful_mode;
        self
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthReport {
    pub status: String,
    pub notes: usize,
}

/// Serves the MCP server over stdio until the client disconnects.
///
/// # Errors
/// Returns any transport or server error.
pub async fn serve_stdio<S: DatabaseSink>(
    control: NotesControlPlane<S>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let service = NotesMcp::with_control(control);
    let (stdin, stdout) = stdio();
    info!("notes-mcp serving on stdio");
    let running = serve_server(service, (stdin, stdout)).await?;
    let reason = running.waiting().await?;
    info!(?reason, "stdio session closed");
    Ok(())
}

/// Binds `config.addr` and serves [`streamable_http_router`] on it.
///
/// # Errors
/// Returns any listener or server error.
pub async fn serve_streamable_http<S: DatabaseSink>(
    control: NotesControlPlane<S>,
    config: McpHttpServerConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %listener.local_addr()?, "notes-mcp serving streamable HTTP at /mcp");
    axum::serve(listener, streamable_http_router(control, &config)).await?;
    Ok(())
}

/// Routes `/mcp` to the streamable HTTP transport and `/health` to a note
/// count.
#[must_use]
pub fn streamable_http_router<S: DatabaseSink>(
    control: NotesControlPlane<S>,
    config: &McpHttpServerConfig,
) -> Router {
    let service: StreamableHttpService<NotesMcp<S>, LocalSessionManager> =
        StreamableHttpService::new(
            session_factory(control.clone()),
            Arc::new(LocalSessionManager::default()),
            StreamableHttpServerConfig {
                sse_keep_alive: config.sse_keep_alive,
                stateful_mode: config.stateful_mode,
                ..Default::default()
            },
        );

    Router::new()
        .route("/health", get(health::<S>))
        .nest_service("/mcp", service)
        .with_state(control)
}

fn session_factory<S: DatabaseSink>(
    control: NotesControlPlane<S>,
) -> impl Fn() -> Result<NotesMcp<S>, std::io::Error> + Send + Sync + 'static {
    move || Ok(NotesMcp::with_control(control.clone()))
}

async fn health<S: DatabaseSink>(
    State(control): State<NotesControlPlane<S>>,
) -> Json<HealthReport> {
    Json(HealthReport {
        status: "ok".to_string(),
        notes: control.list_notes().await.len(),
    })
}
