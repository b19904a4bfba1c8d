//! Daemon entry point for the notes MCP server.
//!
//! Loads configuration from the command line and environment, seeds the notes
//! store, and serves the MCP protocol over stdio and/or streamable HTTP.

mod config;

use std::process::ExitCode;

use notes_core::control::NotesControlPlane;
use notes_core::sink::LoggingSink;
use notes_core::store::NotesStore;
use notes_mcp::server::{serve_stdio, serve_streamable_http};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::NotesConfig;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> ExitCode {
    let config = NotesConfig::from_args();
    init_tracing(config.as_ref().is_ok_and(|config| config.log_json));

    let result = match config {
        Ok(config) => run(config).await,
        Err(err) => Err(err.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "notes-mcpd failed");
            ExitCode::FAILURE
        }
    }
}

// stdout carries the protocol, so logs always go to stderr.
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_ansi(false).with_writer(std::io::stderr))
            .init();
    }
}

async fn run(config: NotesConfig) -> Result<(), BoxError> {
    let store = if config.seed_notes {
        NotesStore::with_seed_notes()
    } else {
        NotesStore::new()
    };
    info!(
        notes = store.len(),
        stdio = config.enable_stdio,
        http = config.http_serve,
        "starting notes-mcpd"
    );
    let control = NotesControlPlane::new(store, LoggingSink);

    let http = config
        .http_serve
        .then(|| tokio::spawn(serve_streamable_http(control.clone(), config.http_config())));

    if config.enable_stdio {
        serve_stdio(control).await?;
        if let Some(handle) = http {
            handle.abort();
        }
        return Ok(());
    }

    match http {
        Some(handle) => handle.await?,
        None => Ok(()),
    }
}
