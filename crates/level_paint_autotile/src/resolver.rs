//! Cluster rescan keeping derived terrain adjacency current

use level_paint_core::{Canvas, Direction, GridPos};

/// Side length of the square cluster rescanned around a changed cell.
/// 3 covers the cell itself and its 8 immediate neighbors.
pub const CLUSTER_SIZE: i32 = 3;

/// Recompute `terrain_neighbors` for every existing cell in the cluster
/// centered on `center`.
///
/// Painting or erasing a cell changes the correct signature of its
/// already-placed terrain neighbors too, so the whole cluster is rescanned,
/// not just the changed cell. Cost is fixed by the cluster and direction
/// counts, independent of canvas size.
///
/// The recompute is a pure function of current canvas state: running it
/// twice in a row yields identical adjacency lists.
pub fn recompute_cluster(canvas: &mut Canvas, center: GridPos) {
    let radius = CLUSTER_SIZE / 2;
    let mut updates: Vec<(GridPos, Vec<Direction>)> = Vec::new();

    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let pos = center.offset(dx, dy);
            if canvas.get(pos).is_none() {
                continue;
            }

            let mut neighbors = Vec::new();
            for dir in Direction::ALL {
                if canvas.is_terrain(pos.neighbor(dir)) {
                    neighbors.push(dir);
                }
            }
            updates.push((pos, neighbors));
        }
    }

    for (pos, neighbors) in updates {
        if let Some(cell) = canvas.get_mut(pos) {
            cell.set_terrain_neighbors(neighbors);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use level_paint_core::PaintKind;

    fn paint_terrain(canvas: &mut Canvas, col: i32, row: i32) -> GridPos {
        let pos = GridPos::new(col, row);
        canvas.paint(pos, PaintKind::Terrain);
        recompute_cluster(canvas, pos);
        pos
    }

    #[test]
    fn test_isolated_terrain_cell_has_no_neighbors() {
        let mut canvas = Canvas::new();
        let pos = paint_terrain(&mut canvas, 0, 0);
        assert!(canvas.get(pos).unwrap().terrain_neighbors().is_empty());
    }

    #[test]
    fn test_painting_updates_earlier_neighbor_symmetrically() {
        let mut canvas = Canvas::new();
        let a = paint_terrain(&mut canvas, 0, 0);
        let b = paint_terrain(&mut canvas, 1, 0);

        // Painting B must retroactively update A even though A came first
        assert_eq!(canvas.get(a).unwrap().terrain_neighbors(), &[Direction::East]);
        assert_eq!(canvas.get(b).unwrap().terrain_neighbors(), &[Direction::West]);
    }

    #[test]
    fn test_neighbors_follow_signature_order() {
        let mut canvas = Canvas::new();
        paint_terrain(&mut canvas, 0, -1); // north
        paint_terrain(&mut canvas, 1, 0); // east
        paint_terrain(&mut canvas, -1, -1); // north-west
        let center = paint_terrain(&mut canvas, 0, 0);

        assert_eq!(
            canvas.get(center).unwrap().terrain_neighbors(),
            &[Direction::North, Direction::East, Direction::NorthWest]
        );
    }

    #[test]
    fn test_non_terrain_cells_do_not_count() {
        let mut canvas = Canvas::new();
        let water = GridPos::new(1, 0);
        canvas.paint(water, PaintKind::Water);
        let center = paint_terrain(&mut canvas, 0, 0);

        assert!(canvas.get(center).unwrap().terrain_neighbors().is_empty());
        // The water cell still gets its adjacency tracked
        assert_eq!(
            canvas.get(water).unwrap().terrain_neighbors(),
            &[Direction::West]
        );
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut canvas = Canvas::new();
        paint_terrain(&mut canvas, 0, 0);
        paint_terrain(&mut canvas, 1, 1);
        let center = GridPos::new(0, 0);

        recompute_cluster(&mut canvas, center);
        let first: Vec<_> = canvas.get(center).unwrap().terrain_neighbors().to_vec();
        recompute_cluster(&mut canvas, center);
        let second: Vec<_> = canvas.get(center).unwrap().terrain_neighbors().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_recompute_is_local_to_the_cluster() {
        let mut canvas = Canvas::new();
        let far = paint_terrain(&mut canvas, 5, 5);
        paint_terrain(&mut canvas, 5, 6);
        let far_neighbors: Vec<_> = canvas.get(far).unwrap().terrain_neighbors().to_vec();
        assert!(!far_neighbors.is_empty());

        // Poison the far cell's cache, then paint well outside its cluster;
        // the stale value must survive untouched.
        canvas
            .get_mut(far)
            .unwrap()
            .set_terrain_neighbors(vec![Direction::NorthWest]);
        paint_terrain(&mut canvas, 0, 0);

        assert_eq!(
            canvas.get(far).unwrap().terrain_neighbors(),
            &[Direction::NorthWest]
        );
    }

    #[test]
    fn test_erase_then_recompute_clears_stale_adjacency() {
        let mut canvas = Canvas::new();
        let a = paint_terrain(&mut canvas, 0, 0);
        let b = paint_terrain(&mut canvas, 1, 0);
        assert_eq!(canvas.get(a).unwrap().terrain_neighbors(), &[Direction::East]);

        canvas.erase(b);
        recompute_cluster(&mut canvas, b);
        assert!(canvas.get(a).unwrap().terrain_neighbors().is_empty());
    }
}
