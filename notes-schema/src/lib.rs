pub mod message;
pub mod note;

pub use message::{ApiMessage, NOTE_NOT_FOUND, TITLE_AND_CONTENT_REQUIRED};
pub use note::{Note, NoteBody, NoteId};
