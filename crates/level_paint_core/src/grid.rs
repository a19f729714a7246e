//! Grid coordinates, compass directions, and cursor-to-cell mapping

use serde::{Deserialize, Serialize};

/// A cell coordinate on the unbounded sparse canvas
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct GridPos {
    pub col: i32,
    pub row: i32,
}

impl GridPos {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Coordinate offset by (dx, dy) cells
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.col + dx, self.row + dy)
    }

    /// Coordinate of the adjacent cell in `dir`
    pub const fn neighbor(self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        self.offset(dx, dy)
    }

    /// Top-left pixel corner of this cell for a given origin and tile size
    pub fn to_pixel(self, origin: [f32; 2], tile_size: f32) -> [f32; 2] {
        [
            origin[0] + self.col as f32 * tile_size,
            origin[1] + self.row as f32 * tile_size,
        ]
    }
}

/// Map a cursor position to the cell under it.
///
/// Uses floor division, not truncation toward zero, so cells left of or
/// above the origin are addressed symmetrically with positive ones: a
/// cursor one pixel left of the origin lands in column -1, not column 0.
pub fn cell_at(cursor: [f32; 2], origin: [f32; 2], tile_size: f32) -> GridPos {
    let dx = cursor[0] - origin[0];
    let dy = cursor[1] - origin[1];
    GridPos::new(
        (dx / tile_size).floor() as i32,
        (dy / tile_size).floor() as i32,
    )
}

/// The 8 compass directions, clockwise from north.
///
/// The order of `ALL` is the fixed order in which adjacency signatures are
/// built; it must stay stable because the concatenated tags are lookup keys
/// for tile variants. Offsets are y-down (screen coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions in signature order
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Unit cell offset (dx, dy), y-down
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Short tag used in adjacency signatures
    pub const fn tag(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::East => "E",
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::West => "W",
            Direction::NorthWest => "NW",
        }
    }
}
