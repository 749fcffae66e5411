//! Client side of the notes resource.
//!
//! - `api.rs`: request builders for each endpoint
//! - `client.rs`: `NotesClient`, one async method per endpoint
//! - `board.rs`: `NotesBoard`, local view state reconciled after every round trip

mod api;
mod board;
#[allow(clippy::module_inception)]
mod client;

pub use api::NotesApi;
pub use board::{EditDraft, NotesBoard};
pub use client::NotesClient;
