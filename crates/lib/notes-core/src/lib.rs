//! Core types and services for notes-mcp.
//!
//! This crate owns the in-memory notes store, the tabular and connection-string
//! parsers used by database ingestion, the database sink seam, and the control
//! plane that validates and executes every server operation.

pub mod control;
pub mod parsers;
pub mod sink;
pub mod store;
