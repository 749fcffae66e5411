use serde::{Deserialize, Serialize};
use url::Url;

/// Settings used when building a `NotesClient` from configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Collection URL of the notes resource.
    /// TOML: `client.base_url`. Default: `http://localhost:4000/api/v1/notes`.
    #[serde(default = "default_base_url")]
    pub base_url: Url,

    /// Optional HTTP proxy for outbound requests.
    /// TOML: `client.proxy`. Example: `http://127.0.0.1:1080`.
    #[serde(default)]
    pub proxy: Option<Url>,

    /// `User-Agent` header sent by the client.
    /// TOML: `client.user_agent`.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            proxy: None,
            user_agent: default_user_agent(),
        }
    }
}

fn default_base_url() -> Url {
    Url::parse("http://localhost:4000/api/v1/notes").expect("valid default notes URL")
}

fn default_user_agent() -> String {
    format!("notes-demo/{}", env!("CARGO_PKG_VERSION"))
}
