use crate::server::router::NotesState;
use axum::{Router, routing::get};

pub mod extract;
pub mod handlers;

/// Mount point of the notes resource.
pub const NOTES_PATH: &str = "/api/v1/notes";

pub fn router() -> Router<NotesState> {
    let collection = get(handlers::list_notes).post(handlers::create_note);
    let item = get(handlers::get_note)
        .put(handlers::update_note)
        .delete(handlers::delete_note);

    Router::new()
        .route(NOTES_PATH, collection.clone())
        .route(&format!("{NOTES_PATH}/"), collection)
        .route(&format!("{NOTES_PATH}/{{id}}"), item.clone())
        .route(&format!("{NOTES_PATH}/{{id}}/"), item)
}
