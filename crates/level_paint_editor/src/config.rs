//! Editor configuration, loaded once at startup

use level_paint_autotile::VariantTable;
use level_paint_core::SelectionTable;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Edge length of one grid cell in pixels
pub const TILE_SIZE: f32 = 64.0;

/// Pixels panned per scroll-wheel step
pub const SCROLL_STEP: f32 = 50.0;

/// Error type for configuration loading failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Immutable configuration the editing core runs against.
///
/// Bundles the cell size, the selection-id palette, and the art set's
/// signature-to-variant table. Built once at application start and passed
/// to `Editor::new`; nothing in the core reads ambient global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default = "default_tile_size")]
    pub tile_size: f32,
    #[serde(default)]
    pub selections: SelectionTable,
    #[serde(default)]
    pub variants: VariantTable,
}

fn default_tile_size() -> f32 {
    TILE_SIZE
}

impl EditorConfig {
    /// Parse a configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!(
            "loaded editor config from {:?}: {} selections, {} tile variants",
            path,
            config.selections.len(),
            config.variants.len()
        );
        Ok(config)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            selections: SelectionTable::default(),
            variants: VariantTable::default(),
        }
    }
}
