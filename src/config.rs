//! Board Configuration
//!
//! Initial columns and UI strings, bundled with the app as `board.json`.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::forms::{validate_input, DEFAULT_VALIDATION_MESSAGE};
use crate::models::{ContainerMarkup, ItemMarkup};

const BUNDLED: &str = include_str!("../board.json");

/// A column present when the board loads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedColumn {
    pub title: String,
    #[serde(default)]
    pub items: Vec<String>,
}

impl SeedColumn {
    pub fn markup(&self) -> ContainerMarkup {
        ContainerMarkup {
            title: self.title.clone(),
            items: self.items.iter().map(|text| ItemMarkup { text: text.clone() }).collect(),
            validation: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub columns: Vec<SeedColumn>,
    /// Shown under a creation form submitted empty
    pub validation_message: String,
    /// `tracing` level name
    pub log_level: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            validation_message: DEFAULT_VALIDATION_MESSAGE.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl BoardConfig {
    /// Parse and check a JSON config. Seeded titles and entries obey the
    /// same non-empty rule as user input.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        for (index, column) in config.columns.iter().enumerate() {
            validate_input(&column.title).map_err(|_| ConfigError::EmptyTitle(index))?;
            for (item_index, item) in column.items.iter().enumerate() {
                validate_input(item).map_err(|_| ConfigError::EmptyItem {
                    column: column.title.clone(),
                    index: item_index,
                })?;
            }
        }
        Ok(config)
    }

    /// The config shipped with the app
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_json(BUNDLED)
    }
}
