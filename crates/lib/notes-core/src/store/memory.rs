use std::{error::Error, fmt};

use notes_store::models::{Note, NoteEntry};
use notes_store::schema::SEED_NOTES;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    NotFound(String),
    InvalidInput(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "Note not found: {id}"),
            Self::InvalidInput(message) => write!(f, "Invalid input: {message}"),
        }
    }
}

impl Error for StoreError {}

pub type StoreResult<T> = Result<T, StoreError>;

/// Insertion-ordered note collection with sequential string identifiers.
#[derive(Debug, Clone, Default)]
pub struct NotesStore {
    entries: Vec<NoteEntry>,
}

impl NotesStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builds a store holding the startup notes.
    #[must_use]
    pub fn with_seed_notes() -> Self {
        let entries = SEED_NOTES
            .iter()
            .enumerate()
            .map(|(index, (title, content))| NoteEntry {
                id: (index + 1).to_string(),
                note: Note::new(*title, *content),
            })
            .collect();
        Self { entries }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lists notes in insertion order.
    #[must_use]
    pub fn list(&self) -> &[NoteEntry] {
        &self.entries
    }

    /// Fetches a note by id.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if no note has the given id.
    pub fn get(&self, id: &str) -> StoreResult<&Note> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.note)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Stores a new note and returns its id.
    ///
    /// # Errors
    /// Returns `StoreError::InvalidInput` if the title or content is blank.
    pub fn create(&mut self, title: &str, content: &str) -> StoreResult<String> {
        // Whitespace-only titles and contents are rejected like empty ones.
        if title.trim().is_empty() || content.trim().is_empty() {
            return Err(StoreError::InvalidInput(
                "Title and content are required".to_string(),
            ));
        }

        let id = (self.entries.len() + 1).to_string();
        self.entries.push(NoteEntry {
            id: id.clone(),
            note: Note::new(title, content),
        });
        Ok(id)
    }
}
