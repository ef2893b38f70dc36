use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use super::mask_api_key;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub llm: LlmSettings,
    pub council: CouncilSettings,
    pub storage: StorageSettings,
}

#[derive(Clone, PartialEq, Eq)]
pub struct LlmSettings {
    /// Empty when `OPENROUTER_API_KEY` is not set.
    pub api_key: String,
    pub api_url: String,
}

impl fmt::Debug for LlmSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmSettings")
            .field("api_key", &mask_api_key(&self.api_key))
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl LlmSettings {
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouncilSettings {
    pub members: Vec<String>,
    pub chairman: String,
    pub max_history_for_chairman: usize,
}

impl CouncilSettings {
    pub fn is_member(&self, model: &str) -> bool {
        self.members.iter().any(|member| member == model)
    }

    /// Trailing window of `turns` that the chairman gets to see.
    pub fn chairman_history<'a, T>(&self, turns: &'a [T]) -> &'a [T] {
        let start = turns.len().saturating_sub(self.max_history_for_chairman);
        &turns[start..]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageSettings {
    pub data_dir: PathBuf,
}

// Serialization helpers
#[derive(Serialize)]
pub(super) struct ConfigReport<'a> {
    pub llm: LlmReport<'a>,
    pub council: CouncilReport<'a>,
    pub storage: StorageReport,
}

#[derive(Serialize)]
pub(super) struct LlmReport<'a> {
    pub api_key: String,
    pub api_url: &'a str,
}

#[derive(Serialize)]
pub(super) struct CouncilReport<'a> {
    pub members: &'a [String],
    pub chairman: &'a str,
    pub max_history_for_chairman: usize,
}

#[derive(Serialize)]
pub(super) struct StorageReport {
    pub data_dir: String,
}

impl<'a> From<&'a Config> for ConfigReport<'a> {
    fn from(config: &'a Config) -> Self {
        ConfigReport {
            llm: LlmReport {
                api_key: mask_api_key(&config.llm.api_key),
                api_url: &config.llm.api_url,
            },
            council: CouncilReport {
                members: &config.council.members,
                chairman: &config.council.chairman,
                max_history_for_chairman: config.council.max_history_for_chairman,
            },
            storage: StorageReport {
                data_dir: config.storage.data_dir.display().to_string(),
            },
        }
    }
}
