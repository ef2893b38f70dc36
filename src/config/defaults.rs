use std::path::PathBuf;

use super::constants::*;
use super::types::{CouncilSettings, LlmSettings, StorageSettings};

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: OPENROUTER_API_URL.to_string(),
        }
    }
}

impl Default for CouncilSettings {
    fn default() -> Self {
        Self {
            members: COUNCIL_MODELS.iter().map(|model| model.to_string()).collect(),
            chairman: CHAIRMAN_MODEL.to_string(),
            max_history_for_chairman: MAX_HISTORY_FOR_CHAIRMAN,
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DATA_DIR),
        }
    }
}
