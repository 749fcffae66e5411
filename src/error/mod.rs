mod client;
mod notes;

pub use client::ClientError;
pub use notes::NotesError;
