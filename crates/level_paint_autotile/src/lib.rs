//! Terrain adjacency autotile system
//!
//! This crate keeps each painted cell's terrain-adjacency signature
//! current and maps signatures to concrete tile art, so terrain edges and
//! corners connect seamlessly while painting.
//!
//! # Example
//!
//! ```rust,ignore
//! use level_paint_autotile::{recompute_cluster, VariantTable};
//! use level_paint_core::{Canvas, GridPos, PaintKind};
//!
//! let mut canvas = Canvas::new();
//! let pos = GridPos::new(0, 0);
//! canvas.paint(pos, PaintKind::Terrain);
//! recompute_cluster(&mut canvas, pos);
//!
//! let mut variants = VariantTable::new("X");
//! variants.insert("W", "land_right_edge");
//! let asset = variants.variant_for(canvas.get(pos).unwrap());
//! ```

pub mod resolver;
pub mod variant;

pub use resolver::{recompute_cluster, CLUSTER_SIZE};
pub use variant::{signature, VariantTable};

// Re-export level_paint_core
pub use level_paint_core;
