use serde::{Deserialize, Serialize};

/// Store-assigned note identifier. Monotonic for the lifetime of a store, never reused.
pub type NoteId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
}

impl Note {
    pub fn new(id: NoteId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Request body for create (`POST`) and update (`PUT`).
///
/// Both fields are optional on the wire so that a missing field reaches validation
/// instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NoteBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl NoteBody {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }

    /// Returns `(title, content)` when both are present and non-empty.
    ///
    /// No trimming is applied: `" "` is an acceptable title.
    pub fn require_fields(self) -> Option<(String, String)> {
        match (self.title, self.content) {
            (Some(title), Some(content)) if !title.is_empty() && !content.is_empty() => {
                Some((title, content))
            }
            _ => None,
        }
    }
}
