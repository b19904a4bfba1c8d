use notes_store::models::{Note, NoteEntry};
use tracing::info;

use crate::sink::DatabaseSink;

use super::{ControlError, NotesControlPlane};

impl<S: DatabaseSink> NotesControlPlane<S> {
    /// Lists every note in insertion order.
    pub async fn list_notes(&self) -> Vec<NoteEntry> {
        self.store.read().await.list().to_vec()
    }

    /// Fetches a note by id.
    ///
    /// # Errors
    /// Returns `ControlError::Store` with `NotFound` if the id is unknown.
    pub async fn get_note(&self, id: &str) -> Result<Note, ControlError> {
        Ok(self.store.read().await.get(id)?.clone())
    }

    /// Creates a note and returns its id.
    ///
    /// # Errors
    /// Returns `ControlError::Store` with `InvalidInput` if the title or
    /// content is blank.
    pub async fn create_note(&self, title: &str, content: &str) -> Result<String, ControlError> {
        let id = self.store.write().await.create(title, content)?;
        info!(id = %id, title = %title, "created note");
        Ok(id)
    }
}
