use std::fs;
use std::path::Path;

use log::info;
use serde::Deserialize;
use thiserror::Error;

use crate::input::AccrualModel;
use crate::time::WeekStart;

/// Defaults loaded from a TOML file passed with `--config`. Every field is
/// optional; command line flags always win over file values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct FileConfig {
    pub annual_days: Option<u32>,
    pub max_accum_days: Option<u32>,
    pub work_day_hours: Option<f64>,
    pub week_start: Option<WeekStart>,
    pub tiered_accum: Option<bool>,
    pub strict_allotment: Option<bool>,
    pub model: Option<AccrualModel>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file \"{path}\"")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("config file \"{path}\" is not valid TOML")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("work-day-hours must be positive, got {0}")]
    NonPositiveWorkDayHours(f64),
}

impl FileConfig {
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;

        if let Some(hours) = config.work_day_hours {
            if hours <= 0.0 {
                return Err(ConfigError::NonPositiveWorkDayHours(hours));
            }
        }

        info!("loaded defaults from \"{}\"", path.display());

        Ok(config)
    }
}
