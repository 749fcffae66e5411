use notes_demo::client::{EditDraft, NotesBoard, NotesClient};
use notes_demo::config::ClientConfig;
use notes_demo::server::router::{NotesState, notes_router};
use notes_demo::{ClientError, Note, NoteBody};
use reqwest::StatusCode;
use tokio::net::TcpListener;
use url::Url;

/// Serves a fresh seeded router on an ephemeral port and returns its notes URL.
async fn serve_seeded() -> Url {
    let store = notes_demo::notes::spawn(true).await;
    let app = notes_router(NotesState::new(store));
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind listener");
    let addr = listener.local_addr().expect("listener has no address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server failed");
    });
    Url::parse(&format!("http://{addr}/api/v1/notes")).expect("invalid url")
}

async fn client() -> NotesClient {
    NotesClient::new(serve_seeded().await).expect("failed to build client")
}

#[tokio::test]
async fn client_round_trips_every_endpoint() {
    let client = client().await;

    let notes = client.list_all().await.unwrap();
    assert_eq!(notes.len(), 2);

    let created = client.create(&NoteBody::new("X", "Y")).await.unwrap();
    assert_eq!(created, Note::new(3, "X", "Y"));

    let updated = client
        .update(1, &NoteBody::new("Updated Title", "Updated Content"))
        .await
        .unwrap();
    assert_eq!(updated, Note::new(1, "Updated Title", "Updated Content"));

    client.delete(1).await.unwrap();
    let err = client.get_by_id(1).await.unwrap_err();
    assert!(err.is_not_found());
    match err {
        ClientError::Status { status, message } => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(message.as_deref(), Some("Note not found"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn client_reports_validation_status() {
    let client = client().await;
    let body = NoteBody {
        title: Some("Bad Note".into()),
        content: None,
    };
    let err = client.create(&body).await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
}

#[tokio::test]
async fn client_from_config_uses_base_url() {
    let base_url = serve_seeded().await;
    let cfg = ClientConfig {
        base_url: base_url.clone(),
        ..ClientConfig::default()
    };
    let client = NotesClient::from_config(&cfg).unwrap();
    assert_eq!(client.base_url(), &base_url);
    assert_eq!(client.list_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn board_load_add_and_table_rows() {
    let mut board = NotesBoard::new(client().await);
    board.load().await.unwrap();
    assert_eq!(board.notes().len(), 2);

    // Local validation: nothing is sent.
    board.title = "only title".into();
    assert!(matches!(board.add().await, Err(ClientError::MissingFields)));
    assert_eq!(board.notes().len(), 2);

    board.content = "and content".into();
    board.add().await.unwrap();
    assert!(board.title.is_empty() && board.content.is_empty());
    assert_eq!(
        board.rows().last().copied(),
        Some((3, "only title", "and content"))
    );
}

#[tokio::test]
async fn board_edit_replaces_matching_entry() {
    let mut board = NotesBoard::new(client().await);
    board.load().await.unwrap();

    let first = board.notes()[0].clone();
    board.start_edit(&first);
    {
        let draft = board.editing_mut().expect("edit mode");
        draft.title = "Edited".into();
    }
    board.submit_edit().await.unwrap();
    assert!(board.editing().is_none());
    assert_eq!(board.notes()[0], Note::new(1, "Edited", "My First Note"));

    // A failed update leaves the list as it was and keeps the draft.
    let second = board.notes()[1].clone();
    board.start_edit(&second);
    board.editing_mut().expect("edit mode").content.clear();
    assert!(board.submit_edit().await.is_err());
    assert_eq!(board.notes()[1], second);
    assert_eq!(board.last_error(), Some("Error editing note"));
    assert!(board.editing().is_some());

    board.cancel_edit();
    assert!(board.editing().is_none());
}

#[tokio::test]
async fn board_lookup_by_id() {
    let mut board = NotesBoard::new(client().await);

    board.note_id = "2".into();
    board.get_by_id().await.unwrap();
    assert_eq!(board.fetched_note().map(|n| n.id), Some(2));
    assert!(board.fetch_error().is_none());

    board.note_id = "999".into();
    assert!(board.get_by_id().await.is_err());
    assert!(board.fetched_note().is_none());
    assert_eq!(board.fetch_error(), Some("Note not found"));

    board.start_edit_by_id().await.unwrap_err();
    assert_eq!(board.fetch_error(), Some("Note not found to edit"));

    board.note_id = "abc".into();
    assert!(matches!(
        board.get_by_id().await,
        Err(ClientError::InvalidId(_))
    ));
    assert_eq!(board.fetch_error(), Some("Note not found"));

    board.note_id = "1".into();
    board.start_edit_by_id().await.unwrap();
    assert!(board.fetch_error().is_none());
    assert_eq!(
        board.editing(),
        Some(&EditDraft {
            id: 1,
            title: "First Note".into(),
            content: "My First Note".into(),
        })
    );

    // Empty input sends nothing and clears the panel.
    board.note_id.clear();
    board.get_by_id().await.unwrap();
    assert!(board.fetched_note().is_none() && board.fetch_error().is_none());
}

#[tokio::test]
async fn board_delete_updates_list_and_lookup_panel() {
    let mut board = NotesBoard::new(client().await);
    board.load().await.unwrap();

    board.note_id = "1".into();
    board.get_by_id().await.unwrap();
    assert!(board.fetched_note().is_some());

    board.delete_by_id().await.unwrap();
    assert!(board.fetched_note().is_none());
    assert_eq!(board.rows(), vec![(2, "Second Note", "My Second Note")]);

    // The server's 404 stays visible to the caller; the view shows a generic message.
    let err = board.delete(1).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(board.last_error(), Some("Error deleting note"));
    assert_eq!(board.notes().len(), 1);
}

#[tokio::test]
async fn board_load_failure_keeps_state() {
    // Nothing listens on this port once the listener is dropped.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let url = Url::parse(&format!("http://{addr}/api/v1/notes")).unwrap();
    let mut board = NotesBoard::new(NotesClient::new(url).unwrap());
    assert!(matches!(board.load().await, Err(ClientError::Reqwest(_))));
    assert!(board.notes().is_empty());
    assert_eq!(board.last_error(), Some("Error fetching notes"));
}

#[test]
fn client_rejects_cannot_be_a_base_url() {
    let url = Url::parse("mailto:notes@example.test").unwrap();
    assert!(matches!(NotesClient::new(url), Err(ClientError::Url(_))));
}
