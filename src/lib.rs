pub mod client;
pub mod config;
pub mod error;
pub mod notes;
pub mod server;
pub mod utils;

pub use client::{NotesBoard, NotesClient};
pub use error::{ClientError, NotesError};
pub use notes::{NotesActorHandle, NotesStore};
pub use notes_schema::{Note, NoteBody, NoteId};
