use super::store::NotesStore;
use crate::error::NotesError;
use notes_schema::{Note, NoteBody, NoteId};
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use tracing::{debug, info};

#[derive(Debug)]
pub enum NotesActorMessage {
    /// Validate and append a new note; replies with the stored note (id assigned).
    Create(NoteBody, RpcReplyPort<Result<Note, NotesError>>),

    /// Snapshot of every note in insertion order.
    List(RpcReplyPort<Vec<Note>>),

    /// Get a note by id.
    Get(NoteId, RpcReplyPort<Result<Note, NotesError>>),

    /// Replace title and content of an existing note.
    Update(NoteId, NoteBody, RpcReplyPort<Result<Note, NotesError>>),

    /// Remove a note by id.
    Delete(NoteId, RpcReplyPort<Result<(), NotesError>>),
}

/// Cloneable handle to the actor owning the `NotesStore`.
///
/// Every operation is a round trip through the actor mailbox, so mutations are applied one
/// at a time in arrival order.
#[derive(Clone)]
pub struct NotesActorHandle {
    actor: ActorRef<NotesActorMessage>,
}

impl NotesActorHandle {
    pub async fn create(&self, body: NoteBody) -> Result<Note, NotesError> {
        ractor::call!(self.actor, NotesActorMessage::Create, body)
            .map_err(|e| NotesError::RactorError(format!("NotesActor Create RPC failed: {e}")))?
    }

    pub async fn list_all(&self) -> Result<Vec<Note>, NotesError> {
        ractor::call!(self.actor, NotesActorMessage::List)
            .map_err(|e| NotesError::RactorError(format!("NotesActor List RPC failed: {e}")))
    }

    pub async fn get_by_id(&self, id: NoteId) -> Result<Note, NotesError> {
        ractor::call!(self.actor, NotesActorMessage::Get, id)
            .map_err(|e| NotesError::RactorError(format!("NotesActor Get RPC failed: {e}")))?
    }

    pub async fn update(&self, id: NoteId, body: NoteBody) -> Result<Note, NotesError> {
        ractor::call!(self.actor, NotesActorMessage::Update, id, body)
            .map_err(|e| NotesError::RactorError(format!("NotesActor Update RPC failed: {e}")))?
    }

    pub async fn delete(&self, id: NoteId) -> Result<(), NotesError> {
        ractor::call!(self.actor, NotesActorMessage::Delete, id)
            .map_err(|e| NotesError::RactorError(format!("NotesActor Delete RPC failed: {e}")))?
    }
}

struct NotesActor;

#[ractor::async_trait]
impl Actor for NotesActor {
    type Msg = NotesActorMessage;
    type State = NotesStore;
    type Arguments = NotesStore;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        store: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        info!(notes = store.len(), "NotesActor initialized");
        Ok(store)
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        store: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            NotesActorMessage::Create(body, reply) => {
                let res = store.create(body);
                if let Ok(note) = &res {
                    debug!(note.id = note.id, total = store.len(), "Note created");
                }
                let _ = reply.send(res);
            }
            NotesActorMessage::List(reply) => {
                let _ = reply.send(store.list_all());
            }
            NotesActorMessage::Get(id, reply) => {
                let _ = reply.send(store.get_by_id(id));
            }
            NotesActorMessage::Update(id, body, reply) => {
                let res = store.update(id, body);
                if res.is_ok() {
                    debug!(note.id = id, "Note updated");
                }
                let _ = reply.send(res);
            }
            NotesActorMessage::Delete(id, reply) => {
                let res = store.delete(id);
                if res.is_ok() {
                    debug!(note.id = id, total = store.len(), "Note deleted");
                }
                let _ = reply.send(res);
            }
        }
        Ok(())
    }
}

/// Spawn the notes actor and return a cloneable handle.
///
/// `seed` selects between the two demo notes and an empty store.
pub async fn spawn(seed: bool) -> NotesActorHandle {
    let store = if seed {
        NotesStore::seeded()
    } else {
        NotesStore::new()
    };
    spawn_with(store).await
}

/// Spawn the notes actor around an existing store.
pub async fn spawn_with(store: NotesStore) -> NotesActorHandle {
    let (actor, _jh) = ractor::Actor::spawn(None, NotesActor, store)
        .await
        .expect("failed to spawn NotesActor");

    NotesActorHandle { actor }
}
