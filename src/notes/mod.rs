//! Notes resource: the in-memory store and the actor that owns it.
//!
//! Layout:
//! - `store.rs`: synchronous `NotesStore` (collection + next-id counter)
//! - `actor.rs`: single-writer ractor actor serializing every store operation

mod actor;
mod store;

pub use actor::{NotesActorHandle, spawn, spawn_with};
pub use store::NotesStore;
