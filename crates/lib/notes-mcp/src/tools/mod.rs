//! MCP tool modules.
//!
//! Tools are grouped by domain: note authoring and tabular database updates.

pub mod database;
pub mod notes;

pub use database::UpdateDatabaseParams;
pub use notes::CreateNoteParams;
