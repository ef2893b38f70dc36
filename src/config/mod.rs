//! Configuration for the LLM council backend.
//!
//! The registry is a plain immutable value built once at startup:
//! - Hardcoded council roster, chairman, endpoint, data directory and history window
//! - `OPENROUTER_API_KEY` from the environment, optionally seeded from a `.env` file
//! - An [`EnvSource`] seam so callers can build a [`Config`] without the process environment
//! - Opt-in validation for callers that want to fail fast

mod builder;
pub mod constants;
mod defaults;
mod env_file;
mod environment;
mod loader;
mod types;
mod validation;

pub use builder::ConfigBuilder;
pub use env_file::{EnvFileLoader, EnvFileStatus, bootstrap_env_file};
pub use environment::{EnvSource, ProcessEnv};
pub use types::{Config, CouncilSettings, LlmSettings, StorageSettings};

/// Shows the first few characters of a key, or `(not set)`.
pub fn mask_api_key(key: &str) -> String {
    if key.is_empty() {
        return "(not set)".to_string();
    }

    let visible = key
        .char_indices()
        .nth(8)
        .map(|(idx, _)| idx)
        .unwrap_or(key.len());
    format!("{}***", &key[..visible])
}
