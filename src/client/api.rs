use notes_schema::{NoteBody, NoteId};
use reqwest::{Client, Request};
use url::Url;

use crate::error::ClientError;

/// Request builders for the notes endpoints, relative to the collection URL.
pub struct NotesApi;

impl NotesApi {
    /// `{base}/{id}`; a trailing slash on `base` is not doubled.
    pub fn item_url(base: &Url, id: NoteId) -> Result<Url, ClientError> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .push(&id.to_string());
        Ok(url)
    }

    pub fn build_list(client: &Client, base: &Url) -> Result<Request, ClientError> {
        Ok(client.get(base.clone()).build()?)
    }

    pub fn build_get(client: &Client, base: &Url, id: NoteId) -> Result<Request, ClientError> {
        Ok(client.get(Self::item_url(base, id)?).build()?)
    }

    pub fn build_create(
        client: &Client,
        base: &Url,
        body: &NoteBody,
    ) -> Result<Request, ClientError> {
        Ok(client.post(base.clone()).json(body).build()?)
    }

    pub fn build_update(
        client: &Client,
        base: &Url,
        id: NoteId,
        body: &NoteBody,
    ) -> Result<Request, ClientError> {
        Ok(client.put(Self::item_url(base, id)?).json(body).build()?)
    }

    pub fn build_delete(client: &Client, base: &Url, id: NoteId) -> Result<Request, ClientError> {
        Ok(client.delete(Self::item_url(base, id)?).build()?)
    }
}
