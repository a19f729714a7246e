//! Adjacency-signature to tile-art-variant lookup

use level_paint_core::Cell;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Build the adjacency signature for a cell: its terrain-neighbor tags in
/// resolver order, joined with `_`.
///
/// The separator keeps multi-letter tags unambiguous (`N` then `E` is
/// "N_E", a single north-east neighbor is "NE"). An isolated cell has the
/// empty signature.
pub fn signature(cell: &Cell) -> String {
    let tags: Vec<&str> = cell.terrain_neighbors().iter().map(|d| d.tag()).collect();
    tags.join("_")
}

/// Static table mapping adjacency signatures to tile asset keys.
///
/// Authored once per tile art set, alongside the art itself. Not every
/// geometrically possible signature needs bespoke art: unmapped signatures
/// resolve to the fallback key, which is visual degradation rather than an
/// error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantTable {
    entries: HashMap<String, String>,
    fallback: String,
}

impl VariantTable {
    /// Create an empty table with the given fallback asset key
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            entries: HashMap::new(),
            fallback: fallback.into(),
        }
    }

    /// Register the asset key for a signature
    pub fn insert(&mut self, signature: impl Into<String>, asset: impl Into<String>) {
        self.entries.insert(signature.into(), asset.into());
    }

    /// Asset key used when a signature has no entry
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the tile variant for a cell's current adjacency signature
    pub fn variant_for(&self, cell: &Cell) -> &str {
        let sig = signature(cell);
        match self.entries.get(&sig) {
            Some(asset) => asset,
            None => {
                log::debug!("no tile variant for signature {:?}, using fallback", sig);
                &self.fallback
            }
        }
    }
}

impl Default for VariantTable {
    /// Empty table with the placeholder fallback tile
    fn default() -> Self {
        Self::new("X")
    }
}
