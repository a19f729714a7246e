//! Read-only per-frame description of the painted level

use level_paint_autotile::VariantTable;
use level_paint_core::{Canvas, CoinKind, EnemyKind, GridPos, ObjectId};

/// Renderable description of one occupied cell.
///
/// Layers draw in a fixed order: water, then terrain, then coin, then
/// enemy, then objects - later layers on top. `water_on_top` flips the
/// water layer above the terrain for that cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellView {
    pub pos: GridPos,
    /// Top-left pixel corner, origin already applied
    pub pixel: [f32; 2],
    pub has_water: bool,
    pub water_on_top: bool,
    /// Resolved tile variant asset key, None when the cell has no terrain
    pub terrain: Option<String>,
    pub coin: Option<CoinKind>,
    pub enemy: Option<EnemyKind>,
    /// Decoration ids in paint order
    pub objects: Vec<ObjectId>,
}

/// Build the snapshot for every occupied coordinate, sorted by coordinate
/// so output is deterministic across runs.
pub(crate) fn build_snapshot(
    canvas: &Canvas,
    variants: &VariantTable,
    origin: [f32; 2],
    tile_size: f32,
) -> Vec<CellView> {
    let mut views: Vec<CellView> = canvas
        .iter()
        .map(|(&pos, cell)| CellView {
            pos,
            pixel: pos.to_pixel(origin, tile_size),
            has_water: cell.has_water,
            water_on_top: cell.water_on_top,
            terrain: cell
                .has_terrain
                .then(|| variants.variant_for(cell).to_string()),
            coin: cell.coin,
            enemy: cell.enemy,
            objects: cell.objects.clone(),
        })
        .collect();
    views.sort_by_key(|view| view.pos);
    views
}
