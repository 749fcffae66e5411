use reqwest::StatusCode;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ClientError {
    /// Transport-level failure (DNS, connect, body decode).
    #[error("HTTP request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// The server answered with a non-2xx status.
    #[error("Unexpected status {status}: {}", message.as_deref().unwrap_or("<no message>"))]
    Status {
        status: StatusCode,
        /// `message` field of the server's error body, when it had one.
        message: Option<String>,
    },

    /// Local validation refused to send the request.
    #[error("Title and content are required")]
    MissingFields,

    /// The lookup input is not a note id.
    #[error("Invalid note id: {0:?}")]
    InvalidId(String),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Reqwest(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}
