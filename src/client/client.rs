use crate::config::ClientConfig;
use crate::error::ClientError;
use notes_schema::{ApiMessage, Note, NoteBody, NoteId};
use reqwest::{Request, Response};
use tracing::debug;
use url::Url;

use super::api::NotesApi;

/// HTTP client for the notes resource.
///
/// Each call is one request; there is no retry, caching or request deduplication.
#[derive(Clone)]
pub struct NotesClient {
    client: reqwest::Client,
    base_url: Url,
}

impl NotesClient {
    /// Client with default reqwest settings against `base_url` (the collection URL).
    pub fn new(base_url: Url) -> Result<Self, ClientError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Client built from the `client` configuration table.
    pub fn from_config(cfg: &ClientConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(cfg.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::none());

        if let Some(proxy_url) = cfg.proxy.as_ref() {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url.as_str())?);
        }

        Self::with_client(builder.build()?, cfg.base_url.clone())
    }

    pub fn with_client(client: reqwest::Client, base_url: Url) -> Result<Self, ClientError> {
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Url(
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn list_all(&self) -> Result<Vec<Note>, ClientError> {
        let req = NotesApi::build_list(&self.client, &self.base_url)?;
        Ok(self.send(req).await?.json().await?)
    }

    pub async fn get_by_id(&self, id: NoteId) -> Result<Note, ClientError> {
        let req = NotesApi::build_get(&self.client, &self.base_url, id)?;
        Ok(self.send(req).await?.json().await?)
    }

    pub async fn create(&self, body: &NoteBody) -> Result<Note, ClientError> {
        let req = NotesApi::build_create(&self.client, &self.base_url, body)?;
        Ok(self.send(req).await?.json().await?)
    }

    pub async fn update(&self, id: NoteId, body: &NoteBody) -> Result<Note, ClientError> {
        let req = NotesApi::build_update(&self.client, &self.base_url, id, body)?;
        Ok(self.send(req).await?.json().await?)
    }

    pub async fn delete(&self, id: NoteId) -> Result<(), ClientError> {
        let req = NotesApi::build_delete(&self.client, &self.base_url, id)?;
        self.send(req).await?;
        Ok(())
    }

    /// Executes `req`; any non-2xx status becomes `ClientError::Status`.
    async fn send(&self, req: Request) -> Result<Response, ClientError> {
        let method = req.method().clone();
        let url = req.url().clone();
        let resp = self.client.execute(req).await?;
        let status = resp.status();
        debug!(%method, %url, %status, "[NotesClient] Response received");

        if status.is_success() {
            return Ok(resp);
        }

        let message = resp
            .json::<ApiMessage>()
            .await
            .ok()
            .map(|body| body.message);
        Err(ClientError::Status { status, message })
    }
}
