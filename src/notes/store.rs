use crate::error::NotesError;
use notes_schema::{Note, NoteBody, NoteId};

/// Authoritative in-memory collection of notes.
///
/// Insertion order is kept for listing. `next_id` only grows, so ids are never reused
/// after a delete.
#[derive(Debug, Clone)]
pub struct NotesStore {
    notes: Vec<Note>,
    next_id: NoteId,
}

impl Default for NotesStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NotesStore {
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            next_id: 1,
        }
    }

    /// Store holding the two demo notes; the next assigned id is 3.
    pub fn seeded() -> Self {
        Self {
            notes: vec![
                Note::new(1, "First Note", "My First Note"),
                Note::new(2, "Second Note", "My Second Note"),
            ],
            next_id: 3,
        }
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn create(&mut self, body: NoteBody) -> Result<Note, NotesError> {
        let (title, content) = body.require_fields().ok_or(NotesError::Validation)?;
        let note = Note {
            id: self.next_id,
            title,
            content,
        };
        self.next_id += 1;
        self.notes.push(note.clone());
        Ok(note)
    }

    pub fn list_all(&self) -> Vec<Note> {
        self.notes.clone()
    }

    pub fn get_by_id(&self, id: NoteId) -> Result<Note, NotesError> {
        self.notes
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or(NotesError::NotFound)
    }

    /// Replaces title and content in place. An unknown id wins over an invalid body.
    pub fn update(&mut self, id: NoteId, body: NoteBody) -> Result<Note, NotesError> {
        let note = self
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(NotesError::NotFound)?;
        let (title, content) = body.require_fields().ok_or(NotesError::Validation)?;
        note.title = title;
        note.content = content;
        Ok(note.clone())
    }

    pub fn delete(&mut self, id: NoteId) -> Result<(), NotesError> {
        let index = self
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or(NotesError::NotFound)?;
        self.notes.remove(index);
        Ok(())
    }
}
