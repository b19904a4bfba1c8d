//! Data models and schema helpers for notes-mcp.
//!
//! This crate defines the canonical data model shared by the parsers, the
//! control plane, and the MCP dispatcher.

pub mod models;
pub mod schema;

pub use models::*;
