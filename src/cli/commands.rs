use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use tracing::{info, warn};

use llm_council::config::{Config, EnvFileLoader, EnvFileStatus, ProcessEnv, mask_api_key};

use super::args::{Cli, Command};

pub(crate) fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.env_file.as_deref());

    match cli.command {
        Command::Show(args) => {
            if args.json {
                println!("{}", config.to_report_json()?);
            } else {
                print!("{}", render_show(&config));
            }
        }
        Command::Models => print!("{}", render_models(&config)),
        Command::Check => {
            config.validate()?;
            println!(
                "{} Council configuration is ready ({} members)",
                "✅".green(),
                config.council.members.len()
            );
        }
    }

    Ok(())
}

pub(crate) fn load_config(env_file: Option<&Path>) -> Config {
    let Some(path) = env_file else {
        return Config::load();
    };

    match EnvFileLoader::from_path(path).load() {
        EnvFileStatus::Loaded(path) | EnvFileStatus::Partial { path, .. } => {
            info!("Using environment file {}", path.display())
        }
        EnvFileStatus::NotFound => warn!("Environment file {} not found", path.display()),
        EnvFileStatus::Invalid(_) => {}
    }
    Config::from_env(&ProcessEnv)
}

pub(crate) fn render_show(config: &Config) -> String {
    let mut out = String::new();
    out.push_str("📋 Council configuration:\n");
    out.push_str(&format!("   API Key: {}\n", mask_api_key(&config.llm.api_key)));
    out.push_str(&format!("   Endpoint: {}\n", config.llm.api_url));
    out.push_str(&format!("   Council: {}\n", config.council.members.join(", ")));
    out.push_str(&format!("   Chairman: {}\n", config.council.chairman));
    out.push_str(&format!(
        "   Chairman history: {} turns\n",
        config.council.max_history_for_chairman
    ));
    out.push_str(&format!(
        "   Data directory: {}\n",
        config.storage.data_dir.display()
    ));
    out
}

pub(crate) fn render_models(config: &Config) -> String {
    let council = &config.council;
    let mut out = format!("Council ({} models):\n", council.members.len());

    for (idx, member) in council.members.iter().enumerate() {
        if *member == council.chairman {
            out.push_str(&format!("  {}. {} {}\n", idx + 1, member, "(chairman)".cyan()));
        } else {
            out.push_str(&format!("  {}. {}\n", idx + 1, member));
        }
    }

    if !council.is_member(&council.chairman) {
        out.push_str(&format!(
            "Chairman: {} {}\n",
            council.chairman,
            "(not a council member)".yellow()
        ));
    }

    out
}
