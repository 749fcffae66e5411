use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use notes_schema::{ApiMessage, NOTE_NOT_FOUND, TITLE_AND_CONTENT_REQUIRED};
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum NotesError {
    /// `title` or `content` missing or empty on create/update.
    #[error("Title and content are required")]
    Validation,

    /// No note carries the requested id.
    #[error("Note not found")]
    NotFound,

    #[error("Ractor error: {0}")]
    RactorError(String),
}

impl NotesError {
    pub fn status(&self) -> StatusCode {
        match self {
            NotesError::Validation => StatusCode::BAD_REQUEST,
            NotesError::NotFound => StatusCode::NOT_FOUND,
            NotesError::RactorError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Any body the JSON extractor refuses is reported like a body without fields.
impl From<JsonRejection> for NotesError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(
            rejection = %rejection,
            "Note body rejected by JSON extractor"
        );
        NotesError::Validation
    }
}

/// A path segment that is not an id cannot name an existing note.
impl From<PathRejection> for NotesError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(rejection = %rejection, "Note id rejected by path extractor");
        NotesError::NotFound
    }
}

impl IntoResponse for NotesError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            NotesError::Validation => TITLE_AND_CONTENT_REQUIRED,
            NotesError::NotFound => NOTE_NOT_FOUND,
            NotesError::RactorError(detail) => {
                tracing::error!(error = %detail, "Notes store unavailable");
                "Internal server error"
            }
        };
        (status, Json(ApiMessage::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(err: NotesError) -> (StatusCode, String) {
        let resp = err.into_response();
        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn validation_maps_to_400_with_fixed_message() {
        let (status, body) = body_of(NotesError::Validation).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"message":"Title and content are required"}"#);
    }

    #[tokio::test]
    async fn not_found_maps_to_404_with_fixed_message() {
        let (status, body) = body_of(NotesError::NotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, r#"{"message":"Note not found"}"#);
    }

    #[tokio::test]
    async fn ractor_error_hides_details() {
        let (status, body) = body_of(NotesError::RactorError("mailbox closed".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.contains("mailbox"));
    }
}
