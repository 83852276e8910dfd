//! Indicator parameters.
//!
//! Every field has a default, so a TOML file only needs the keys it changes:
//!
//! ```toml
//! update_frequency_secs = 5
//! line_color = "#FFA500"
//! line_style = "Dots"
//! initial_offset_pips = -25.0
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Rgb;

/// Dash pattern of the projection line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStyle {
    #[default]
    Solid,
    Dots,
    DotsRare,
    DotsVeryRare,
    Lines,
    LinesDots,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndicatorConfig {
    /// Seconds between timer-driven recomputes. Minimum 1.
    pub update_frequency_secs: u64,
    pub line_color: Rgb,
    /// Minimum 1.
    pub line_width: u32,
    pub line_style: LineStyle,
    pub show_label: bool,
    pub label_positive_color: Rgb,
    pub label_negative_color: Rgb,
    /// Starting distance of the line from the bid, in pips.
    pub initial_offset_pips: f64,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            update_frequency_secs: 1,
            line_color: Rgb::DODGER_BLUE,
            line_width: 2,
            line_style: LineStyle::Solid,
            show_label: true,
            label_positive_color: Rgb::GREEN,
            label_negative_color: Rgb::RED,
            initial_offset_pips: 50.0,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{field} must be at least {min}, got {value}")]
    BelowMinimum { field: &'static str, min: u64, value: u64 },

    #[error("initial_offset_pips must be finite, got {0}")]
    NonFiniteOffset(f64),
}

impl IndicatorConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load `path` if it exists, defaults otherwise. A present but invalid file is an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::info!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.update_frequency_secs < 1 {
            return Err(ConfigError::BelowMinimum {
                field: "update_frequency_secs",
                min: 1,
                value: self.update_frequency_secs,
            });
        }
        if self.line_width < 1 {
            return Err(ConfigError::BelowMinimum {
                field: "line_width",
                min: 1,
                value: u64::from(self.line_width),
            });
        }
        if !self.initial_offset_pips.is_finite() {
            return Err(ConfigError::NonFiniteOffset(self.initial_offset_pips));
        }
        Ok(())
    }

    pub fn update_interval(&self) -> Duration {
        Duration::from_secs(self.update_frequency_secs.max(1))
    }
}
