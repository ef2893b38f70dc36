#[cfg(test)]
mod tests {
    use std::sync::{Mutex, OnceLock};

    use clap::Parser;
    use tempfile::TempDir;

    use llm_council::config::Config;
    use llm_council::config::constants::{API_KEY_ENV_VAR, CHAIRMAN_MODEL};

    use crate::cli::Cli;
    use crate::cli::args::Command;
    use crate::cli::commands::{load_config, render_models, render_show, run};

    fn env_lock<'a>() -> std::sync::MutexGuard<'a, ()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    struct EnvGuard {
        saved: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        fn new(vars: &[(&str, Option<&str>)]) -> Self {
            let saved = vars
                .iter()
                .map(|(key, _)| (key.to_string(), std::env::var(key).ok()))
                .collect::<Vec<_>>();
            for (key, value) in vars {
                match value {
                    Some(val) => unsafe { std::env::set_var(key, val) },
                    None => unsafe { std::env::remove_var(key) },
                }
            }
            Self { saved }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, value) in &self.saved {
                match value {
                    Some(val) => unsafe { std::env::set_var(key, val) },
                    None => unsafe { std::env::remove_var(key) },
                }
            }
        }
    }

    fn config_with_key(key: &str) -> Config {
        Config::builder()
            .with_llm(|llm| llm.api_key = key.to_string())
            .build()
    }

    #[test]
    fn parses_show_with_json_flag() {
        let cli = Cli::try_parse_from(["llm-council", "show", "--json"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(cli.env_file.is_none());
        assert!(matches!(cli.command, Command::Show(ref args) if args.json));
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["llm-council", "check", "-vv", "--env-file", "local.env"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.env_file.unwrap().to_str(), Some("local.env"));
        assert!(matches!(cli.command, Command::Check));
    }

    #[test]
    fn requires_a_subcommand() {
        assert!(Cli::try_parse_from(["llm-council"]).is_err());
    }

    #[test]
    fn show_masks_api_key() {
        let rendered = render_show(&config_with_key("sk-or-v1-abcdefghijkl"));
        assert!(rendered.contains("API Key: sk-or-v1***"));
        assert!(!rendered.contains("abcdefghijkl"));
        assert!(rendered.contains("Chairman history: 3 turns"));
        assert!(rendered.contains("Data directory: data/conversations"));
    }

    #[test]
    fn show_reports_missing_key() {
        let rendered = render_show(&Config::builder().build());
        assert!(rendered.contains("API Key: (not set)"));
    }

    #[test]
    fn models_lists_council_in_order() {
        let rendered = render_models(&config_with_key("k"));
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Council (4 models):");
        assert!(lines[1].starts_with("  1. openai/gpt-5.1"));
        assert!(lines[2].contains(CHAIRMAN_MODEL));
        assert!(lines[2].contains("(chairman)"));
        assert!(lines[4].starts_with("  4. deepseek/deepseek-v3.2"));
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn models_flags_outside_chairman() {
        let config = Config::builder()
            .with_council(|council| council.chairman = "meta/llama-4".to_string())
            .build();
        let rendered = render_models(&config);
        assert!(!rendered.contains("(chairman)"));
        assert!(rendered.contains("Chairman: meta/llama-4"));
        assert!(rendered.contains("(not a council member)"));
    }

    #[test]
    fn explicit_env_file_supplies_api_key() {
        let _lock = env_lock();
        let _env = EnvGuard::new(&[(API_KEY_ENV_VAR, None)]);
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("council.env");
        std::fs::write(&path, "OPENROUTER_API_KEY=sk-or-from-file\n").unwrap();

        let config = load_config(Some(path.as_path()));
        assert_eq!(config.llm.api_key, "sk-or-from-file");
    }

    #[test]
    fn missing_explicit_env_file_still_builds_config() {
        let _lock = env_lock();
        let _env = EnvGuard::new(&[(API_KEY_ENV_VAR, None)]);
        let dir = TempDir::new().unwrap();

        let config = load_config(Some(dir.path().join("absent.env").as_path()));
        assert_eq!(config.llm.api_key, "");
        assert_eq!(config.council.members.len(), 4);
    }

    #[test]
    fn check_fails_without_api_key() {
        let _lock = env_lock();
        let _env = EnvGuard::new(&[(API_KEY_ENV_VAR, None)]);
        let dir = TempDir::new().unwrap();
        let env_file = dir.path().join("absent.env");

        let cli = Cli::try_parse_from([
            "llm-council",
            "check",
            "--env-file",
            env_file.to_str().unwrap(),
        ])
        .unwrap();

        let err = run(cli).unwrap_err();
        assert!(err.to_string().contains(API_KEY_ENV_VAR));
    }

    #[test]
    fn check_passes_with_api_key() {
        let _lock = env_lock();
        let _env = EnvGuard::new(&[(API_KEY_ENV_VAR, Some("sk-or-process"))]);
        let dir = TempDir::new().unwrap();
        let env_file = dir.path().join("absent.env");

        let cli = Cli::try_parse_from([
            "llm-council",
            "check",
            "--env-file",
            env_file.to_str().unwrap(),
        ])
        .unwrap();

        run(cli).unwrap();
    }
}
