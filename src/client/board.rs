use crate::error::ClientError;
use notes_schema::{Note, NoteBody, NoteId};
use tracing::warn;

use super::client::NotesClient;

const FETCH_NOTES_ERROR: &str = "Error fetching notes";
const ADD_NOTE_ERROR: &str = "Error adding note";
const EDIT_NOTE_ERROR: &str = "Error editing note";
const DELETE_NOTE_ERROR: &str = "Error deleting note";
const LOOKUP_NOT_FOUND: &str = "Note not found";
const EDIT_LOOKUP_NOT_FOUND: &str = "Note not found to edit";

/// The note currently open for editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub id: NoteId,
    pub title: String,
    pub content: String,
}

/// Local view of the notes collection.
///
/// The list mirrors the last successful server response: it is replaced wholesale by
/// `load`, and otherwise patched with exactly what each successful mutation returned.
/// Failed requests leave it untouched. Nothing here reconciles with other clients.
pub struct NotesBoard {
    client: NotesClient,
    notes: Vec<Note>,
    /// Create form: title input.
    pub title: String,
    /// Create form: content input.
    pub content: String,
    editing: Option<EditDraft>,
    /// Lookup input used by the "by id" actions.
    pub note_id: String,
    fetched_note: Option<Note>,
    fetch_error: Option<String>,
    last_error: Option<String>,
}

impl NotesBoard {
    pub fn new(client: NotesClient) -> Self {
        Self {
            client,
            notes: Vec::new(),
            title: String::new(),
            content: String::new(),
            editing: None,
            note_id: String::new(),
            fetched_note: None,
            fetch_error: None,
            last_error: None,
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn editing(&self) -> Option<&EditDraft> {
        self.editing.as_ref()
    }

    pub fn editing_mut(&mut self) -> Option<&mut EditDraft> {
        self.editing.as_mut()
    }

    pub fn fetched_note(&self) -> Option<&Note> {
        self.fetched_note.as_ref()
    }

    pub fn fetch_error(&self) -> Option<&str> {
        self.fetch_error.as_deref()
    }

    /// Generic message for the last failed list/add/edit/delete.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// `(id, title, content)` rows of the "All Notes" table.
    pub fn rows(&self) -> Vec<(NoteId, &str, &str)> {
        self.notes
            .iter()
            .map(|n| (n.id, n.title.as_str(), n.content.as_str()))
            .collect()
    }

    /// Replaces the local list with the server's.
    pub async fn load(&mut self) -> Result<(), ClientError> {
        match self.client.list_all().await {
            Ok(notes) => {
                self.notes = notes;
                Ok(())
            }
            Err(e) => Err(self.fail(FETCH_NOTES_ERROR, e)),
        }
    }

    /// Creates a note from the create form. Nothing is sent unless both inputs are non-empty.
    pub async fn add(&mut self) -> Result<(), ClientError> {
        if self.title.is_empty() || self.content.is_empty() {
            return Err(ClientError::MissingFields);
        }
        let body = NoteBody::new(self.title.as_str(), self.content.as_str());
        match self.client.create(&body).await {
            Ok(created) => {
                self.notes.push(created);
                self.title.clear();
                self.content.clear();
                Ok(())
            }
            Err(e) => Err(self.fail(ADD_NOTE_ERROR, e)),
        }
    }

    pub fn start_edit(&mut self, note: &Note) {
        self.editing = Some(EditDraft {
            id: note.id,
            title: note.title.clone(),
            content: note.content.clone(),
        });
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Sends the edit draft; on success the matching local entry is replaced.
    pub async fn submit_edit(&mut self) -> Result<(), ClientError> {
        let Some(draft) = self.editing.as_ref() else {
            return Ok(());
        };
        let id = draft.id;
        let body = NoteBody::new(draft.title.as_str(), draft.content.as_str());
        match self.client.update(id, &body).await {
            Ok(updated) => {
                if let Some(slot) = self.notes.iter_mut().find(|n| n.id == id) {
                    *slot = updated;
                }
                self.editing = None;
                Ok(())
            }
            Err(e) => Err(self.fail(EDIT_NOTE_ERROR, e)),
        }
    }

    /// Deletes `id`; on success it is dropped locally and from the lookup panel.
    pub async fn delete(&mut self, id: NoteId) -> Result<(), ClientError> {
        match self.client.delete(id).await {
            Ok(()) => {
                self.notes.retain(|n| n.id != id);
                if self.fetched_note.as_ref().is_some_and(|n| n.id == id) {
                    self.fetched_note = None;
                }
                Ok(())
            }
            Err(e) => Err(self.fail(DELETE_NOTE_ERROR, e)),
        }
    }

    /// Looks up `note_id` independently of the list.
    pub async fn get_by_id(&mut self) -> Result<(), ClientError> {
        self.fetch_error = None;
        self.fetched_note = None;
        let Some(id) = self.lookup_id(LOOKUP_NOT_FOUND)? else {
            return Ok(());
        };
        match self.client.get_by_id(id).await {
            Ok(note) => {
                self.fetched_note = Some(note);
                Ok(())
            }
            Err(e) => {
                self.fetch_error = Some(LOOKUP_NOT_FOUND.to_string());
                Err(e)
            }
        }
    }

    /// Looks up `note_id` and opens it for editing.
    pub async fn start_edit_by_id(&mut self) -> Result<(), ClientError> {
        self.fetch_error = None;
        self.fetched_note = None;
        let Some(id) = self.lookup_id(EDIT_LOOKUP_NOT_FOUND)? else {
            return Ok(());
        };
        match self.client.get_by_id(id).await {
            Ok(note) => {
                self.start_edit(&note);
                Ok(())
            }
            Err(e) => {
                self.fetch_error = Some(EDIT_LOOKUP_NOT_FOUND.to_string());
                Err(e)
            }
        }
    }

    pub async fn delete_by_id(&mut self) -> Result<(), ClientError> {
        let Some(id) = self.lookup_id(LOOKUP_NOT_FOUND)? else {
            return Ok(());
        };
        self.delete(id).await
    }

    /// `None` for an empty input; an unparsable input sets `fetch_error`.
    fn lookup_id(&mut self, not_found: &str) -> Result<Option<NoteId>, ClientError> {
        let raw = self.note_id.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        match raw.parse::<NoteId>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                self.fetch_error = Some(not_found.to_string());
                Err(ClientError::InvalidId(raw.to_string()))
            }
        }
    }

    fn fail(&mut self, message: &str, error: ClientError) -> ClientError {
        warn!(error = %error, "[NotesBoard] {message}");
        self.last_error = Some(message.to_string());
        error
    }
}
