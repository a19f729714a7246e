//! Paintable kinds and the selection-id table

use crate::cell::{CoinKind, EnemyKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Error type for paint operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaintError {
    #[error("selection id {id} is not a paintable kind")]
    InvalidSelection { id: u8 },
}

/// One of the closed set of paintable content kinds.
///
/// The UI layer hands the core a raw selection id; `SelectionTable`
/// resolves it to one of these. Matching on the enum is exhaustive, so a
/// kind can never silently shadow another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaintKind {
    Terrain,
    Water,
    Coin(CoinKind),
    Enemy(EnemyKind),
}

/// Immutable mapping from raw UI selection ids to paintable kinds.
///
/// Built once at startup, either from the default palette or from JSON
/// authored alongside the art set. Ids absent from the table are a
/// caller-side bug and resolve to `PaintError::InvalidSelection`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionTable {
    entries: HashMap<u8, PaintKind>,
}

impl SelectionTable {
    pub fn new(entries: HashMap<u8, PaintKind>) -> Self {
        Self { entries }
    }

    /// Resolve a raw selection id to its paintable kind
    pub fn resolve(&self, id: u8) -> Result<PaintKind, PaintError> {
        self.entries
            .get(&id)
            .copied()
            .ok_or(PaintError::InvalidSelection { id })
    }

    pub fn contains(&self, id: u8) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SelectionTable {
    /// The stock palette: terrain, water, three coins, four enemies.
    ///
    /// Ids 0 and 1 are reserved for the player spawn and sky in the menu
    /// layout, so paintable ids start at 2.
    fn default() -> Self {
        let entries = HashMap::from([
            (2, PaintKind::Terrain),
            (3, PaintKind::Water),
            (4, PaintKind::Coin(CoinKind::Gold)),
            (5, PaintKind::Coin(CoinKind::Silver)),
            (6, PaintKind::Coin(CoinKind::Diamond)),
            (7, PaintKind::Enemy(EnemyKind::Spikes)),
            (8, PaintKind::Enemy(EnemyKind::Tooth)),
            (9, PaintKind::Enemy(EnemyKind::ShellLeft)),
            (10, PaintKind::Enemy(EnemyKind::ShellRight)),
        ]);
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_resolves_every_stock_id() {
        let table = SelectionTable::default();
        assert_eq!(table.len(), 9);
        assert_eq!(table.resolve(2), Ok(PaintKind::Terrain));
        assert_eq!(table.resolve(3), Ok(PaintKind::Water));
        assert_eq!(table.resolve(6), Ok(PaintKind::Coin(CoinKind::Diamond)));
        assert_eq!(table.resolve(10), Ok(PaintKind::Enemy(EnemyKind::ShellRight)));
    }

    #[test]
    fn test_unknown_id_is_invalid_selection() {
        let table = SelectionTable::default();
        assert_eq!(
            table.resolve(0),
            Err(PaintError::InvalidSelection { id: 0 })
        );
        assert_eq!(
            table.resolve(42),
            Err(PaintError::InvalidSelection { id: 42 })
        );
    }

    #[test]
    fn test_table_round_trips_through_json() {
        let table = SelectionTable::default();
        let json = serde_json::to_string(&table).unwrap();
        let loaded: SelectionTable = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.resolve(7), Ok(PaintKind::Enemy(EnemyKind::Spikes)));
        assert_eq!(loaded.len(), table.len());
    }
}
