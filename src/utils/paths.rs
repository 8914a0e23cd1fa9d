use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};

/// Database location used when neither the CLI nor the config names one.
pub const DEFAULT_DATABASE_PATH: &str = "./list.db";

pub fn get_checklist_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".checklist"))
}

pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_checklist_dir()?.join("config.toml"))
}

pub fn get_logs_dir() -> Result<PathBuf> {
    Ok(get_checklist_dir()?.join("logs"))
}

pub fn get_crash_log_path() -> Result<PathBuf> {
    Ok(get_checklist_dir()?.join("crash.log"))
}

/// CLI flag first, then config, then `./list.db`.
pub fn resolve_database_path(cli_path: Option<&Path>, config_path: Option<&Path>) -> PathBuf {
    cli_path
        .or(config_path)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH))
}
