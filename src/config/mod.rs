mod basic;
mod client;
mod notes;

pub use basic::BasicConfig;
pub use client::ClientConfig;
pub use notes::NotesConfig;

use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, sync::LazyLock};

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Core server configuration (see `basic` table in config.toml).
    #[serde(default)]
    pub basic: BasicConfig,

    /// Notes store settings (see `notes` table in config.toml).
    #[serde(default)]
    pub notes: NotesConfig,

    /// Settings for `NotesClient` (see `client` table in config.toml).
    #[serde(default)]
    pub client: ClientConfig,
}

const DEFAULT_CONFIG_FILE: &str = "config.toml";

impl Config {
    /// Builds a Figment that merges defaults and a config TOML file.
    pub fn figment() -> Figment {
        let figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if PathBuf::from(DEFAULT_CONFIG_FILE).is_file() {
            figment.merge(Toml::file(DEFAULT_CONFIG_FILE))
        } else {
            figment
        }
    }

    /// Loads configuration by merging defaults and `config.toml` if present.
    pub fn from_optional_toml() -> Self {
        Self::figment().extract().unwrap_or_else(|err| {
            panic!("failed to extract configuration (defaults + optional config.toml): {err}")
        })
    }
}

/// Global, lazily-initialized configuration instance.
pub static CONFIG: LazyLock<Config> = LazyLock::new(Config::from_optional_toml);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo_server() {
        let cfg: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .extract()
            .expect("defaults extract");
        assert_eq!(cfg.basic.listen_port, 4000);
        assert_eq!(cfg.basic.loglevel, "info");
        assert!(cfg.notes.seed_demo_notes);
        assert_eq!(
            cfg.client.base_url.as_str(),
            "http://localhost:4000/api/v1/notes"
        );
        assert!(cfg.client.proxy.is_none());
    }

    #[test]
    fn toml_overrides_defaults() {
        let cfg: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::string(
                r#"
                [basic]
                listen_addr = "127.0.0.1"
                listen_port = 8080

                [notes]
                seed_demo_notes = false

                [client]
                base_url = "http://notes.internal:8080/api/v1/notes"
                "#,
            ))
            .extract()
            .expect("toml extract");
        assert_eq!(cfg.basic.listen_addr.to_string(), "127.0.0.1");
        assert_eq!(cfg.basic.listen_port, 8080);
        assert_eq!(cfg.basic.loglevel, "info");
        assert!(!cfg.notes.seed_demo_notes);
        assert_eq!(cfg.client.base_url.host_str(), Some("notes.internal"));
    }
}
