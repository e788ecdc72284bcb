use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::core::utils::{config_file, ensure_dir};
use crate::domain::{ChartType, Period, ThemeMode, ValidationMode};
use crate::errors::{DashboardError, DashboardResult};

const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    pub locale: String,
    pub currency: String,
    pub theme: ThemeMode,
    pub period: Period,
    pub chart_type: ChartType,
    pub validation: ValidationMode,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            theme: ThemeMode::Light,
            period: Period::Month,
            chart_type: ChartType::Doughnut,
            validation: ValidationMode::Strict,
        }
    }
}

impl DashboardConfig {
    /// Strips padding around the currency and locale and upper-cases the currency.
    pub fn normalized(mut self) -> Self {
        self.currency = self.currency.trim().to_ascii_uppercase();
        self.locale = self.locale.trim().to_string();
        self
    }

    fn check(&self) -> DashboardResult<()> {
        let code = self.currency.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DashboardError::Config(format!(
                "currency `{}` is not a three-letter ISO code",
                self.currency
            )));
        }
        if self.locale.trim().is_empty() {
            return Err(DashboardError::Config("locale must not be empty".into()));
        }
        Ok(())
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Manager for the default config location.
    pub fn new() -> Self {
        Self::with_path(config_file())
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the config, falling back to defaults when no file exists yet.
    pub fn load(&self) -> DashboardResult<DashboardConfig> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(DashboardConfig::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config = serde_json::from_str::<DashboardConfig>(&data)?.normalized();
        config.check()?;
        tracing::info!(path = %self.path.display(), "loaded dashboard config");
        Ok(config)
    }

    pub fn save(&self, config: &DashboardConfig) -> DashboardResult<()> {
        config.check()?;
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::info!(path = %self.path.display(), "saved dashboard config");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> DashboardResult<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
