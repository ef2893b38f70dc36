use std::collections::HashSet;

use anyhow::{Result, anyhow, bail};
use tracing::debug;

use super::constants::API_KEY_ENV_VAR;
use super::types::Config;

pub fn validate(config: &Config) -> Result<()> {
    if !config.llm.has_api_key() {
        return Err(anyhow!(
            "OpenRouter API key not found. Set {API_KEY_ENV_VAR} in the environment or in a .env file"
        ));
    }

    let council = &config.council;
    if council.members.is_empty() {
        bail!("Council has no member models");
    }

    let mut seen = HashSet::new();
    for member in &council.members {
        if !seen.insert(member.as_str()) {
            bail!("Council member '{member}' is listed more than once");
        }
    }

    if council.max_history_for_chairman == 0 {
        bail!("Chairman history window must be at least one turn");
    }

    if !council.is_member(&council.chairman) {
        debug!(
            "Chairman '{}' is not one of the council members",
            council.chairman
        );
    }

    Ok(())
}
