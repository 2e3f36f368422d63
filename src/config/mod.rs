use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analytics::AggregationLimits;
use crate::currency::{CurrencyCode, CurrencyFormatter, LocaleConfig};
use crate::errors::{InsightsError, Result};

/// Overrides the directory that holds `config.json`.
pub const HOME_ENV_VAR: &str = "LEDGER_INSIGHTS_HOME";
const APP_DIR: &str = "ledger_insights";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    pub fraction_digits: u8,
    pub limits: AggregationLimits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-IN".into(),
            currency: "INR".into(),
            fraction_digits: 0,
            limits: AggregationLimits::default(),
        }
    }
}

impl Config {
    pub fn formatter(&self) -> CurrencyFormatter {
        CurrencyFormatter::new(
            CurrencyCode::new(&self.currency),
            LocaleConfig::for_tag(&self.locale),
            self.fraction_digits,
        )
    }
}

/// Loads and persists [`Config`] under a base directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Uses `$LEDGER_INSIGHTS_HOME`, falling back to the platform config dir.
    pub fn from_env() -> Result<Self> {
        let base = match env::var_os(HOME_ENV_VAR) {
            Some(home) => PathBuf::from(home),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or_else(|| {
                    InsightsError::Config("no configuration directory available".into())
                })?,
        };
        Ok(Self::with_base_dir(base))
    }

    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            path: base.join(CONFIG_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns defaults when no file has been written yet.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no config file; using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|err| {
            InsightsError::Config(format!("{}: {}", self.path.display(), err))
        })
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)
    }
}

/// Stages `data` next to `path` and renames it into place.
pub(crate) fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().expect("tempdir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf());
        assert_eq!(manager.load().expect("load"), Config::default());
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempdir().expect("tempdir");
        let manager = ConfigManager::with_base_dir(dir.path().join("nested"));
        let config = Config {
            locale: "en-US".into(),
            currency: "USD".into(),
            fraction_digits: 2,
            limits: AggregationLimits {
                categories: 3,
                assets: 2,
                liabilities: 1,
            },
        };
        manager.save(&config).expect("save");
        assert_eq!(manager.load().expect("load"), config);
        assert!(!tmp_path(manager.path()).exists());
    }

    #[test]
    fn partial_files_fill_in_defaults() {
        let dir = tempdir().expect("tempdir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf());
        fs::write(manager.path(), r#"{"currency": "USD", "limits": {"categories": 4}}"#)
            .expect("write");
        let config = manager.load().expect("load");
        assert_eq!(config.currency, "USD");
        assert_eq!(config.locale, "en-IN");
        assert_eq!(config.limits.categories, 4);
        assert_eq!(config.limits.assets, 5);
    }

    #[test]
    fn malformed_files_report_the_path() {
        let dir = tempdir().expect("tempdir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf());
        fs::write(manager.path(), "{ nope").expect("write");
        let err = manager.load().expect_err("malformed config");
        assert!(matches!(err, InsightsError::Config(_)));
        assert!(err.to_string().contains("config.json"));
    }
}
