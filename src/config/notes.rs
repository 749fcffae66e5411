use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotesConfig {
    /// Start the store with the two demo notes (ids 1 and 2, next id 3).
    /// TOML: `notes.seed_demo_notes`. Default: `true`.
    #[serde(default = "default_seed")]
    pub seed_demo_notes: bool,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            seed_demo_notes: default_seed(),
        }
    }
}

fn default_seed() -> bool {
    true
}
