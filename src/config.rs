use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::checklist::DEFAULT_ITEMS;
use crate::utils::paths::get_config_path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Overrides `./list.db`; the `--db` flag still wins.
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// Maximum number of characters accepted for a new item label
    #[serde(default = "default_char_limit")]
    pub char_limit: usize,

    /// Items inserted on the first start, when the database is empty
    #[serde(default = "default_items")]
    pub default_items: Vec<String>,
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_char_limit() -> usize {
    20
}

fn default_items() -> Vec<String> {
    DEFAULT_ITEMS.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            database_path: None,
            char_limit: default_char_limit(),
            default_items: default_items(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config at {config_path:?}"))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config at {config_path:?}"))?;

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content)?;

        Ok(())
    }
}
