use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;

use tracing::{debug, warn};

const ENV_FILE_NAME: &str = ".env";

/// Result of trying to load a local `.env` file into the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFileStatus {
    Loaded(PathBuf),
    /// Loaded, but some lines could not be parsed and were skipped.
    Partial { path: PathBuf, skipped_lines: usize },
    NotFound,
    Invalid(String),
}

impl EnvFileStatus {
    pub fn is_loaded(&self) -> bool {
        matches!(
            self,
            EnvFileStatus::Loaded(_) | EnvFileStatus::Partial { .. }
        )
    }
}

/// Loads `KEY=VALUE` pairs into the process environment.
///
/// Variables that are already set keep their current value. A missing file is
/// not an error. Unparseable lines are logged and skipped so the remaining
/// entries still load; any real problem surfaces at first use of the affected
/// value.
#[derive(Debug, Clone, Default)]
pub struct EnvFileLoader {
    path: Option<PathBuf>,
}

impl EnvFileLoader {
    /// Searches for `.env` in the current directory and its ancestors.
    pub fn new() -> Self {
        Self { path: None }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn load(&self) -> EnvFileStatus {
        let Some(path) = self.path.clone().or_else(find_env_file) else {
            debug!("No environment file found");
            return EnvFileStatus::NotFound;
        };

        let entries = match dotenvy::from_path_iter(&path) {
            Ok(entries) => entries,
            Err(err) if err.not_found() => {
                debug!("No environment file at {}", path.display());
                return EnvFileStatus::NotFound;
            }
            Err(err) => {
                warn!("Ignoring environment file {}: {err}", path.display());
                return EnvFileStatus::Invalid(err.to_string());
            }
        };

        let mut skipped_lines = 0;
        for entry in entries {
            match entry {
                Ok((key, value)) => {
                    if env::var_os(&key).is_none() {
                        // SAFETY: runs during startup, before other threads read the environment.
                        unsafe { env::set_var(&key, &value) };
                    }
                }
                Err(dotenvy::Error::Io(err)) => {
                    warn!("Stopped reading environment file {}: {err}", path.display());
                    return EnvFileStatus::Invalid(err.to_string());
                }
                Err(err) => {
                    warn!("Skipping line in {}: {err}", path.display());
                    skipped_lines += 1;
                }
            }
        }

        debug!("Loaded environment file {}", path.display());
        if skipped_lines == 0 {
            EnvFileStatus::Loaded(path)
        } else {
            EnvFileStatus::Partial {
                path,
                skipped_lines,
            }
        }
    }
}

fn find_env_file() -> Option<PathBuf> {
    let cwd = env::current_dir().ok()?;
    cwd.ancestors()
        .map(|dir| dir.join(ENV_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

static BOOTSTRAP: OnceLock<EnvFileStatus> = OnceLock::new();

/// Runs the default `.env` search once per process; later calls return the
/// first outcome.
pub fn bootstrap_env_file() -> &'static EnvFileStatus {
    BOOTSTRAP.get_or_init(|| EnvFileLoader::new().load())
}
