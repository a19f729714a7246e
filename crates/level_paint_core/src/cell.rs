//! The painted content of one grid position

use crate::grid::Direction;
use crate::selection::PaintKind;
use serde::{Deserialize, Serialize};

/// Identifier of a decoration object in the art set
pub type ObjectId = u32;

/// Collectible coin variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoinKind {
    Gold,
    Silver,
    Diamond,
}

/// Enemy variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Spikes,
    Tooth,
    ShellLeft,
    ShellRight,
}

/// Content record for one occupied cell.
///
/// `terrain_neighbors` is derived data: it caches which of the 8 adjacent
/// cells also have terrain, and is rebuilt by the neighbor resolver after
/// every relevant change. It is never part of the cell's painted content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub has_terrain: bool,
    terrain_neighbors: Vec<Direction>,
    pub has_water: bool,
    pub water_on_top: bool,
    pub coin: Option<CoinKind>,
    pub enemy: Option<EnemyKind>,
    /// Decoration ids in paint order
    pub objects: Vec<ObjectId>,
}

impl Cell {
    /// Create a cell from its first paint action
    pub fn new(kind: PaintKind) -> Self {
        let mut cell = Self::default();
        cell.apply(kind);
        cell
    }

    /// Apply a paint action on top of the existing content.
    ///
    /// Additive: setting one field never clears another. Water painted onto
    /// a cell that already has terrain renders as an overlay above it.
    pub fn apply(&mut self, kind: PaintKind) {
        match kind {
            PaintKind::Terrain => self.has_terrain = true,
            PaintKind::Water => {
                self.has_water = true;
                if self.has_terrain {
                    self.water_on_top = true;
                }
            }
            PaintKind::Coin(coin) => self.coin = Some(coin),
            PaintKind::Enemy(enemy) => self.enemy = Some(enemy),
        }
    }

    /// Directions in which an adjacent cell also has terrain, in signature
    /// order, as of the last resolver pass
    pub fn terrain_neighbors(&self) -> &[Direction] {
        &self.terrain_neighbors
    }

    /// Replace the derived adjacency list.
    ///
    /// Only the neighbor resolver should call this; setting it by hand
    /// breaks the consistency invariant with the geometric neighbors.
    pub fn set_terrain_neighbors(&mut self, neighbors: Vec<Direction>) {
        self.terrain_neighbors = neighbors;
    }

    /// True when every content field is at its default.
    ///
    /// The derived adjacency cache does not count as content.
    pub fn is_empty(&self) -> bool {
        !self.has_terrain
            && !self.has_water
            && self.coin.is_none()
            && self.enemy.is_none()
            && self.objects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_is_additive() {
        let mut cell = Cell::new(PaintKind::Terrain);
        cell.apply(PaintKind::Enemy(EnemyKind::Tooth));

        assert!(cell.has_terrain);
        assert_eq!(cell.enemy, Some(EnemyKind::Tooth));

        cell.apply(PaintKind::Coin(CoinKind::Gold));
        assert!(cell.has_terrain);
        assert_eq!(cell.enemy, Some(EnemyKind::Tooth));
        assert_eq!(cell.coin, Some(CoinKind::Gold));
    }

    #[test]
    fn test_water_over_terrain_is_an_overlay() {
        let mut cell = Cell::new(PaintKind::Terrain);
        cell.apply(PaintKind::Water);
        assert!(cell.has_water);
        assert!(cell.water_on_top);
    }

    #[test]
    fn test_terrain_over_water_keeps_water_beneath() {
        let mut cell = Cell::new(PaintKind::Water);
        cell.apply(PaintKind::Terrain);
        assert!(cell.has_water);
        assert!(!cell.water_on_top);
    }

    #[test]
    fn test_repainting_coin_replaces_it() {
        let mut cell = Cell::new(PaintKind::Coin(CoinKind::Silver));
        cell.apply(PaintKind::Coin(CoinKind::Diamond));
        assert_eq!(cell.coin, Some(CoinKind::Diamond));
    }

    #[test]
    fn test_is_empty_ignores_derived_adjacency() {
        let mut cell = Cell::default();
        assert!(cell.is_empty());

        cell.set_terrain_neighbors(vec![Direction::North]);
        assert!(cell.is_empty());

        cell.apply(PaintKind::Terrain);
        assert!(!cell.is_empty());
    }
}
