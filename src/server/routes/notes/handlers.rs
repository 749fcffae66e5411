use super::extract::{NoteForm, NoteIdParam};
use crate::error::NotesError;
use crate::server::router::NotesState;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use notes_schema::Note;
use tracing::info;

/// POST /api/v1/notes
pub async fn create_note(
    State(state): State<NotesState>,
    NoteForm(body): NoteForm,
) -> Result<Response, NotesError> {
    let note = state.store.create(body).await?;
    info!(note.id = note.id, "[Notes] Created");
    Ok((StatusCode::CREATED, Json(note)).into_response())
}

/// GET /api/v1/notes
pub async fn list_notes(State(state): State<NotesState>) -> Result<Json<Vec<Note>>, NotesError> {
    Ok(Json(state.store.list_all().await?))
}

/// GET /api/v1/notes/{id}
pub async fn get_note(
    State(state): State<NotesState>,
    NoteIdParam(id): NoteIdParam,
) -> Result<Json<Note>, NotesError> {
    Ok(Json(state.store.get_by_id(id).await?))
}

/// PUT /api/v1/notes/{id}
///
/// The id is resolved before the body: an unknown id answers 404 even when the body is
/// invalid.
pub async fn update_note(
    State(state): State<NotesState>,
    NoteIdParam(id): NoteIdParam,
    body: Result<NoteForm, NotesError>,
) -> Result<Json<Note>, NotesError> {
    let body = match body {
        Ok(NoteForm(body)) => body,
        Err(err) => {
            state.store.get_by_id(id).await?;
            return Err(err);
        }
    };
    let note = state.store.update(id, body).await?;
    info!(note.id = note.id, "[Notes] Updated");
    Ok(Json(note))
}

/// DELETE /api/v1/notes/{id}
pub async fn delete_note(
    State(state): State<NotesState>,
    NoteIdParam(id): NoteIdParam,
) -> Result<StatusCode, NotesError> {
    state.store.delete(id).await?;
    info!(note.id = id, "[Notes] Deleted");
    Ok(StatusCode::NO_CONTENT)
}
