//! In-memory notes store.
//!
//! Notes live for the lifetime of the server instance that owns the store.

pub mod memory;

pub use memory::{NotesStore, StoreError, StoreResult};
