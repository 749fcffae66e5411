use crate::notes::NotesActorHandle;
use crate::server::routes::notes;

use axum::{
    Router,
    extract::Request,
    http::{HeaderName, HeaderValue, StatusCode, Version, header::USER_AGENT},
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use base64::Engine as _;
use rand::RngCore;
use std::time::Instant;
use tracing::Level;

const MAX_REQUEST_ID_LEN: usize = 128;
const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

fn generate_request_id() -> String {
    // 96 bits => 16 chars base64url (no padding).
    let mut bytes = [0u8; 12];
    rand::rng().fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

fn format_http_version(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "HTTP/0.9",
        Version::HTTP_10 => "HTTP/1.0",
        Version::HTTP_11 => "HTTP/1.1",
        Version::HTTP_2 => "HTTP/2.0",
        Version::HTTP_3 => "HTTP/3.0",
        _ => "HTTP/?",
    }
}

#[derive(Clone)]
pub struct NotesState {
    pub store: NotesActorHandle,
}

impl NotesState {
    pub fn new(store: NotesActorHandle) -> Self {
        Self { store }
    }
}

async fn root_handler() -> &'static str {
    "Server is Running! 🚀"
}

async fn not_found_handler() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// 5xx logs as errors, 4xx as warnings, everything else as info.
fn access_level(status: StatusCode) -> Level {
    if status.is_server_error() {
        Level::ERROR
    } else if status.is_client_error() {
        Level::WARN
    } else {
        Level::INFO
    }
}

async fn access_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let version = req.version();

    let request_id = req
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty() && v.len() <= MAX_REQUEST_ID_LEN)
        .map_or_else(generate_request_id, str::to_string);

    let user_agent = req
        .headers()
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let start = Instant::now();
    let mut resp = next.run(req).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        resp.headers_mut().insert(X_REQUEST_ID, value);
    }

    let status = resp.status();
    let latency_ms = start.elapsed().as_millis() as u64;

    macro_rules! access_event {
        ($level:ident) => {
            tracing::$level!(
                http.status = status.as_u16(),
                http.method = %method,
                http.path = uri.path(),
                http.version = format_http_version(version),
                latency_ms,
                request_id = %request_id,
                user_agent = %user_agent,
                "[Access] Request completed"
            )
        };
    }

    let level = access_level(status);
    if level == Level::ERROR {
        access_event!(error);
    } else if level == Level::WARN {
        access_event!(warn);
    } else {
        access_event!(info);
    }

    resp
}

pub fn notes_router(state: NotesState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .merge(notes::router())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(middleware::from_fn(access_log))
}
