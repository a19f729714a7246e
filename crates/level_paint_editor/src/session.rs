//! Paint stroke deduplication

use level_paint_core::GridPos;

/// Tracks the last painted cell within one stroke.
///
/// While the paint button is held the input layer reports the cursor every
/// tick; without this guard a stationary cursor would repaint the same
/// cell (and re-trigger the cluster recompute) every frame. The stroke
/// ends when the button is released.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaintSession {
    last_painted: Option<GridPos>,
}

impl PaintSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `pos` as painted. Returns false when `pos` is already the
    /// last painted cell of this stroke, in which case the paint action
    /// should be skipped.
    pub fn try_begin(&mut self, pos: GridPos) -> bool {
        if self.last_painted == Some(pos) {
            return false;
        }
        self.last_painted = Some(pos);
        true
    }

    /// End the stroke on button release
    pub fn release(&mut self) {
        self.last_painted = None;
    }

    pub fn last_painted(&self) -> Option<GridPos> {
        self.last_painted
    }
}
