//! Editing core for level_paint
//!
//! Wires the sparse canvas, the selection table, and the autotile resolver
//! into a frame-driven editing session. The window, input polling, and
//! sprite rendering live outside this crate; it consumes cursor positions
//! and selection ids and produces a renderable snapshot per frame.

mod config;
mod editor;
mod render;
mod session;

pub use config::{ConfigError, EditorConfig, SCROLL_STEP, TILE_SIZE};
pub use editor::Editor;
pub use render::CellView;
pub use session::PaintSession;

// Re-export the lower layers
pub use level_paint_autotile;
pub use level_paint_core;
