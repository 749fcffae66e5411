use crate::error::NotesError;
use crate::utils::logging::with_pretty_json_debug;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use notes_schema::{NoteBody, NoteId};
use tracing::debug;

/// JSON body of a create or update request.
///
/// Malformed JSON, a wrong content type or non-string fields are all reported as
/// `NotesError::Validation`; field presence is checked later by the store.
pub struct NoteForm(pub NoteBody);

impl<S> FromRequest<S> for NoteForm
where
    S: Send + Sync,
{
    type Rejection = NotesError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<NoteBody>::from_request(req, state).await?;

        with_pretty_json_debug(&body, |pretty_body| {
            debug!(body = %pretty_body, "[Notes] Extracted note body");
        });

        Ok(Self(body))
    }
}

/// The `{id}` path segment. Anything that is not a non-negative integer is `NotFound`.
pub struct NoteIdParam(pub NoteId);

impl<S> FromRequestParts<S> for NoteIdParam
where
    S: Send + Sync,
{
    type Rejection = NotesError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<NoteId>::from_request_parts(parts, state).await?;
        Ok(Self(id))
    }
}
