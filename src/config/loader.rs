use anyhow::Result;
use tracing::debug;

use super::Config;
use super::builder::ConfigBuilder;
use super::env_file::bootstrap_env_file;
use super::environment::{EnvSource, ProcessEnv, apply_env_overrides};
use super::types::ConfigReport;
use super::validation::validate;

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Loads the default `.env` file (once per process) and reads the process
    /// environment. Never fails: a missing API key is left empty.
    pub fn load() -> Self {
        let status = bootstrap_env_file();
        debug!("Environment file bootstrap: {status:?}");
        Self::from_env(&ProcessEnv)
    }

    /// Builds the configuration from `env` without touching the process.
    pub fn from_env<E>(env: &E) -> Self
    where
        E: EnvSource + ?Sized,
    {
        let config = apply_env_overrides(ConfigBuilder::new(), env).build();
        if !config.llm.has_api_key() {
            debug!("OpenRouter API key is not set; requests will fail at first use");
        }
        config
    }

    pub fn validate(&self) -> Result<()> {
        validate(self)
    }

    /// Pretty JSON view of the configuration with the API key masked.
    pub fn to_report_json(&self) -> Result<String> {
        let report = ConfigReport::from(self);
        Ok(serde_json::to_string_pretty(&report)?)
    }
}
