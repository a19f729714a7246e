//! Core data structures for level_paint
//!
//! This crate provides the fundamental types for a sparse painted level:
//! - `GridPos` - Integer cell coordinate on an unbounded canvas
//! - `Direction` - The 8 compass directions, in signature order
//! - `Cell` - Painted content of one grid position
//! - `Canvas` - Sparse cell store keyed by coordinate
//! - `PaintKind` / `SelectionTable` - Paintable kinds and the raw
//!   selection-id mapping consumed from the UI layer

mod canvas;
mod cell;
mod grid;
mod selection;

pub use canvas::Canvas;
pub use cell::{Cell, CoinKind, EnemyKind, ObjectId};
pub use grid::{cell_at, Direction, GridPos};
pub use selection::{PaintError, PaintKind, SelectionTable};
