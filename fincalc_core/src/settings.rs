//! # Settings
//!
//! Process-wide preferences shared by the front ends. Settings are plain
//! serde data and can be loaded from a TOML file:
//!
//! ```toml
//! language = "de"
//! max_schedule_months = 600
//! ```
//!
//! Missing keys take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::localization::detect_system_language;
use crate::numeric::{MAX_SCHEDULE_MONTHS, SCHEDULE_MONTHS_CEILING};

/// User-adjustable settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// UI language code (e.g., "en", "ko")
    pub language: String,

    /// Longest monthly schedule a calculation may generate
    pub max_schedule_months: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            language: detect_system_language(),
            max_schedule_months: MAX_SCHEDULE_MONTHS,
        }
    }
}

impl Settings {
    /// Parse settings from TOML text. `origin` names the source in errors.
    pub fn from_toml_str(text: &str, origin: &str) -> CalcResult<Self> {
        let settings: Settings =
            toml::from_str(text).map_err(|e| CalcError::config(origin, e.to_string()))?;
        settings.validate(origin)?;
        Ok(settings)
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> CalcResult<Self> {
        let origin = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|e| CalcError::config(&origin, e.to_string()))?;
        let settings = Settings::from_toml_str(&text, &origin)?;
        log::info!("Loaded settings from {} (language {})", origin, settings.language);
        Ok(settings)
    }

    /// Override the language, keeping everything else.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    fn validate(&self, origin: &str) -> CalcResult<()> {
        if self.max_schedule_months == 0 {
            return Err(CalcError::config(origin, "max_schedule_months must be at least 1"));
        }
        if self.max_schedule_months > SCHEDULE_MONTHS_CEILING {
            return Err(CalcError::config(
                origin,
                format!("max_schedule_months must be at most {}", SCHEDULE_MONTHS_CEILING),
            ));
        }
        Ok(())
    }
}
