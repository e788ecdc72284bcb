use dirs::config_dir;
use std::{env, fs, path::Path, path::PathBuf};

const DEFAULT_DIR_NAME: &str = "dashboard_core";
const CONFIG_FILE: &str = "config.json";
const HOME_ENV: &str = "DASHBOARD_CORE_HOME";

/// Returns the application config directory, defaulting to `<config dir>/dashboard_core`.
pub fn app_config_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Path of the persisted dashboard configuration.
pub fn config_file() -> PathBuf {
    app_config_dir().join(CONFIG_FILE)
}

pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
