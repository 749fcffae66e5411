use serde::{Deserialize, Serialize};

pub const TITLE_AND_CONTENT_REQUIRED: &str = "Title and content are required";
pub const NOTE_NOT_FOUND: &str = "Note not found";

/// `{"message": "..."}` body returned with every error status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiMessage {
    pub message: String,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
