use std::collections::HashMap;
use std::env;

use anyhow::{Result, anyhow};
use tracing::warn;

use super::builder::ConfigBuilder;
use super::constants::API_KEY_ENV_VAR;

/// Read-only view of environment variables consulted while building a [`Config`].
///
/// [`Config`]: super::Config
pub trait EnvSource {
    fn get(&self, key: &str) -> Result<Option<String>>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Result<Option<String>> {
        env_string(key)
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(HashMap::get(self, key).cloned())
    }
}

pub fn apply_env_overrides<E>(builder: ConfigBuilder, env: &E) -> ConfigBuilder
where
    E: EnvSource + ?Sized,
{
    match env.get(API_KEY_ENV_VAR) {
        Ok(Some(api_key)) => builder.with_llm(|llm| llm.api_key = api_key),
        Ok(None) => builder,
        Err(err) => {
            warn!("Ignoring {API_KEY_ENV_VAR}: {err:#}");
            builder
        }
    }
}

pub fn env_string(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(val) => Ok(Some(val)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(anyhow!("{key} contains invalid UTF-8")),
    }
}
