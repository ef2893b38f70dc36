use super::types::{Config, CouncilSettings, LlmSettings, StorageSettings};

#[derive(Debug)]
pub struct ConfigBuilder {
    pub(super) llm: LlmSettings,
    pub(super) council: CouncilSettings,
    pub(super) storage: StorageSettings,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            llm: LlmSettings::default(),
            council: CouncilSettings::default(),
            storage: StorageSettings::default(),
        }
    }

    pub fn with_llm<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut LlmSettings),
    {
        update(&mut self.llm);
        self
    }

    pub fn with_council<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut CouncilSettings),
    {
        update(&mut self.council);
        self
    }

    pub fn with_storage<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut StorageSettings),
    {
        update(&mut self.storage);
        self
    }

    pub fn build(self) -> Config {
        Config {
            llm: self.llm,
            council: self.council,
            storage: self.storage,
        }
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
