use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

pub mod defaults;

use defaults::*;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Prepared programmes file (channel id -> programme entries with their site)
    #[serde(default = "default_programs_path")]
    pub programs_path: PathBuf,
    /// JSON-lines channel record store
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_guide_path")]
    pub guide_path: PathBuf,
}

fn default_programs_path() -> PathBuf {
    programs_path_under(Path::new(DEFAULT_PUBLIC_PATH))
}

fn default_database_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATABASE_PATH)
}

fn default_guide_path() -> PathBuf {
    PathBuf::from(DEFAULT_GUIDE_PATH)
}

/// Location of the programmes file below a public root directory
pub fn programs_path_under(public_path: &Path) -> PathBuf {
    public_path.join(PROGRAMS_FILE_RELATIVE_PATH)
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            programs_path: default_programs_path(),
            database_path: default_database_path(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            guide_path: default_guide_path(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file, falling back to defaults when it is absent
    pub fn load_from_file<P: AsRef<Path>>(config_file: P) -> Result<Self> {
        let config_file = config_file.as_ref();
        if config_file.exists() {
            let contents = std::fs::read_to_string(config_file)?;
            Ok(toml::from_str(&contents)?)
        } else {
            info!(
                "Config file {} not found, using defaults",
                config_file.display()
            );
            Ok(Self::default())
        }
    }

    /// Apply environment overrides from the process environment
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply environment overrides using the supplied lookup
    ///
    /// `PUBLIC_PATH` rebases the programmes file to
    /// `${PUBLIC_PATH}/scripts/output/programs.json`.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(public_path) = lookup(ENV_PUBLIC_PATH).filter(|p| !p.is_empty()) {
            self.input.programs_path = programs_path_under(Path::new(&public_path));
        }
    }
}
