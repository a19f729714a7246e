//! Frame-driven editing orchestration

use crate::config::{EditorConfig, SCROLL_STEP};
use crate::render::{build_snapshot, CellView};
use crate::session::PaintSession;
use level_paint_autotile::recompute_cluster;
use level_paint_core::{cell_at, Canvas, GridPos, ObjectId, PaintError};

/// The editing core: canvas, configuration, pannable origin, and the
/// current paint stroke.
///
/// One paint event is fully processed - store mutation plus cluster
/// recompute - before the next is read; everything here runs on the frame
/// loop's thread.
#[derive(Debug, Default)]
pub struct Editor {
    config: EditorConfig,
    canvas: Canvas,
    origin: [f32; 2],
    session: PaintSession,
    /// Cursor-to-origin offset while the pan button is held
    pan_offset: Option<[f32; 2]>,
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn origin(&self) -> [f32; 2] {
        self.origin
    }

    /// The cell currently under the cursor
    pub fn cell_under(&self, cursor: [f32; 2]) -> GridPos {
        cell_at(cursor, self.origin, self.config.tile_size)
    }

    /// Apply one paint event.
    ///
    /// Resolves the selection id, skips the paint when the cursor is still
    /// in the cell painted last tick, otherwise paints and rescans the
    /// surrounding cluster. Returns the painted cell, or `Ok(None)` when
    /// the stroke guard suppressed the action.
    ///
    /// An unknown selection id fails before any state changes - the canvas
    /// and the stroke are left untouched.
    pub fn paint_at(
        &mut self,
        cursor: [f32; 2],
        selection_id: u8,
    ) -> Result<Option<GridPos>, PaintError> {
        let kind = self.config.selections.resolve(selection_id)?;
        let pos = self.cell_under(cursor);
        if !self.session.try_begin(pos) {
            return Ok(None);
        }

        self.canvas.paint(pos, kind);
        recompute_cluster(&mut self.canvas, pos);
        Ok(Some(pos))
    }

    /// Place a decoration at the cell under the cursor
    pub fn place_object_at(&mut self, cursor: [f32; 2], object: ObjectId) -> GridPos {
        let pos = self.cell_under(cursor);
        self.canvas.place_object(pos, object);
        pos
    }

    /// Erase the cell under the cursor.
    ///
    /// Removing a terrain cell changes its neighbors' correct signatures,
    /// so the cluster is rescanned just like after a paint. Returns the
    /// erased cell, or None when nothing was there.
    pub fn erase_at(&mut self, cursor: [f32; 2]) -> Option<GridPos> {
        let pos = self.cell_under(cursor);
        if !self.canvas.erase(pos) {
            return None;
        }
        recompute_cluster(&mut self.canvas, pos);
        Some(pos)
    }

    /// End the current stroke on paint-button release
    pub fn release(&mut self) {
        self.session.release();
    }

    /// Start panning: remember the cursor's offset from the origin
    pub fn begin_pan(&mut self, cursor: [f32; 2]) {
        self.pan_offset = Some([cursor[0] - self.origin[0], cursor[1] - self.origin[1]]);
    }

    /// Move the origin so it keeps its offset from the cursor
    pub fn pan_to(&mut self, cursor: [f32; 2]) {
        if let Some(offset) = self.pan_offset {
            self.origin = [cursor[0] - offset[0], cursor[1] - offset[1]];
        }
    }

    /// Stop panning on pan-button release
    pub fn end_pan(&mut self) {
        self.pan_offset = None;
    }

    /// Scroll the origin by wheel steps, horizontally or vertically
    pub fn scroll(&mut self, steps: f32, vertical: bool) {
        if vertical {
            self.origin[1] -= steps * SCROLL_STEP;
        } else {
            self.origin[0] -= steps * SCROLL_STEP;
        }
    }

    /// Renderable snapshot of every occupied cell for this frame
    pub fn snapshot(&self) -> Vec<CellView> {
        build_snapshot(
            &self.canvas,
            &self.config.variants,
            self.origin,
            self.config.tile_size,
        )
    }
}
