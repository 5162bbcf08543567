use crate::core::aggregate::MIN_CHART_HOURS;
use crate::core::rates::DEFAULT_FALLBACK_RATE;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Keys written by `init`; `config --check` reports the ones missing from the file.
pub const CONFIG_KEYS: &[&str] = &[
    "dataset",
    "fallback_hourly_rate",
    "chart_floor_hours",
    "currency_symbol",
    "separator_char",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_dataset")]
    pub dataset: String,
    /// Hourly rate applied to employees without one on record.
    #[serde(default = "default_fallback_rate")]
    pub fallback_hourly_rate: f64,
    /// Lower bound for the daily chart scale.
    #[serde(default = "default_chart_floor")]
    pub chart_floor_hours: f64,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_dataset() -> String {
    Config::dataset_file().to_string_lossy().to_string()
}
fn default_fallback_rate() -> f64 {
    DEFAULT_FALLBACK_RATE
}
fn default_chart_floor() -> f64 {
    MIN_CHART_HOURS
}
fn default_currency_symbol() -> String {
    "£".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: default_dataset(),
            fallback_hourly_rate: default_fallback_rate(),
            chart_floor_hours: default_chart_floor(),
            currency_symbol: default_currency_symbol(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rtimesheet")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rtimesheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.conf")
    }

    /// Return the full path of the default JSON dataset
    pub fn dataset_file() -> PathBuf {
        Self::config_dir().join("timesheets.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !self.fallback_hourly_rate.is_finite() || self.fallback_hourly_rate < 0.0 {
            return Err(AppError::Config(format!(
                "fallback_hourly_rate must be a non-negative number, got {}",
                self.fallback_hourly_rate
            )));
        }
        if !self.chart_floor_hours.is_finite() || self.chart_floor_hours < 0.0 {
            return Err(AppError::Config(format!(
                "chart_floor_hours must be a non-negative number, got {}",
                self.chart_floor_hours
            )));
        }
        Ok(())
    }

    /// Keys from [`CONFIG_KEYS`] that the file at `path` does not define.
    pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
        if !path.exists() {
            return Ok(CONFIG_KEYS.to_vec());
        }

        let content = fs::read_to_string(path)?;
        let value: serde_yaml::Value = serde_yaml::from_str(&content)?;
        let mapping = value.as_mapping();

        Ok(CONFIG_KEYS
            .iter()
            .copied()
            .filter(|key| {
                mapping
                    .map(|m| !m.contains_key(serde_yaml::Value::from(*key)))
                    .unwrap_or(true)
            })
            .collect())
    }

    /// Initialize configuration and dataset files.
    ///
    /// Returns the configuration that was (or, in test mode, would have been) written.
    pub fn init_all(custom_dataset: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let dataset_path = match custom_dataset {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::dataset_file(),
        };

        let config = Config {
            dataset: dataset_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }
}
