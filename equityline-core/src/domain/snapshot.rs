//! Point-in-time view of the account, the active instrument and its positions.
//!
//! Hosts build one per recompute; the CLI loads one from a scenario file
//! (TOML or JSON, picked by extension).

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{AccountSnapshot, OpenPosition, SymbolInfo};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketSnapshot {
    pub account: AccountSnapshot,
    pub symbol: SymbolInfo,
    #[serde(default)]
    pub positions: Vec<OpenPosition>,
}

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Failed to read scenario {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML scenario: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON scenario: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Symbol {symbol} has non-positive pip size {pip_size}")]
    InvalidPipSize { symbol: String, pip_size: f64 },
}

impl MarketSnapshot {
    /// Positions that belong to the displayed instrument.
    pub fn active_positions(&self) -> impl Iterator<Item = &OpenPosition> {
        self.positions.iter().filter(move |p| p.symbol == self.symbol.name)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ScenarioError> {
        let snapshot: Self = toml::from_str(s)?;
        snapshot.validate()
    }

    pub fn from_json_str(s: &str) -> Result<Self, ScenarioError> {
        let snapshot: Self = serde_json::from_str(s)?;
        snapshot.validate()
    }

    /// Load a scenario file. `.json` is parsed as JSON, anything else as TOML.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.display().to_string(),
            source,
        })?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content),
            _ => Self::from_toml_str(&content),
        }
    }

    fn validate(self) -> Result<Self, ScenarioError> {
        if self.symbol.pip_size.is_nan() || self.symbol.pip_size <= 0.0 {
            return Err(ScenarioError::InvalidPipSize {
                symbol: self.symbol.name.clone(),
                pip_size: self.symbol.pip_size,
            });
        }
        Ok(self)
    }
}
