use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{DrillError, DrillResult};
use crate::frequency::{table_span, MAX_TABLE_SLOTS};

pub const CONFIG_ENV: &str = "DRILLS_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Largest count any array drill accepts.
    pub capacity: usize,
    /// Upper bound of the non-negative frequency table.
    pub value_limit: i64,
    pub shift_low: i64,
    pub shift_high: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            capacity: 1000,
            value_limit: 150,
            shift_low: -500,
            shift_high: 270,
        }
    }
}

impl Settings {
    /// Reads the file named by `DRILLS_CONFIG`, or the defaults when unset.
    pub fn load() -> DrillResult<Self> {
        match env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> DrillResult<Self> {
        let content = fs::read_to_string(path).map_err(|err| {
            DrillError::settings(format!("failed to read {}: {err}", path.display()))
        })?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let settings = match format.as_deref() {
            Some("json") => Self::parse_json(&content)?,
            Some("toml") => Self::parse_toml(&content)?,
            _ => {
                let trimmed = content.trim_start();
                if trimmed.starts_with('{') {
                    Self::parse_json(&content)?
                } else {
                    Self::parse_toml(&content)?
                }
            }
        };
        debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    pub fn parse_toml(content: &str) -> DrillResult<Self> {
        let settings: Self =
            toml::from_str(content).map_err(|err| DrillError::settings(err.to_string()))?;
        settings.validate()
    }

    pub fn parse_json(content: &str) -> DrillResult<Self> {
        let settings: Self =
            serde_json::from_str(content).map_err(|err| DrillError::settings(err.to_string()))?;
        settings.validate()
    }

    fn validate(self) -> DrillResult<Self> {
        if self.capacity == 0 {
            return Err(DrillError::settings("capacity must be positive"));
        }
        if self.value_limit < 0 {
            return Err(DrillError::settings("value_limit must not be negative"));
        }
        if self.shift_low > self.shift_high {
            return Err(DrillError::settings(format!(
                "shift_low ({}) is above shift_high ({})",
                self.shift_low, self.shift_high
            )));
        }
        let limit = MAX_TABLE_SLOTS as i128;
        if table_span(0, self.value_limit) > limit {
            return Err(DrillError::settings(format!(
                "value_limit ({}) needs more than {MAX_TABLE_SLOTS} table slots",
                self.value_limit
            )));
        }
        if table_span(self.shift_low, self.shift_high) > limit {
            return Err(DrillError::settings(format!(
                "shift range [{}, {}] needs more than {MAX_TABLE_SLOTS} table slots",
                self.shift_low, self.shift_high
            )));
        }
        Ok(self)
    }
}
