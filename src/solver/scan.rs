use grid_util::{Grid as _, SimpleGrid};

use crate::grid::{Cell, Coord, Grid, INFINITY};
use crate::solver::{relax, ShortestPathSolver};

/// Dijkstra with a linear scan for the closest unvisited cell on every step. O(V²), but it
/// states the visiting rule directly and serves as the reference for [HeapSolver](super::HeapSolver).
#[derive(Clone, Copy, Debug, Default)]
pub struct ScanSolver;

impl ShortestPathSolver for ScanSolver {
    fn search(
        &self,
        grid: &Grid,
        cells: &mut SimpleGrid<Cell>,
        _start: Coord,
        target: Coord,
    ) -> Vec<Coord> {
        let mut order = Vec::new();
        loop {
            let closest = grid
                .coords()
                .filter_map(|coord| Some((coord, *cells.get_point(coord.point())?)))
                .filter(|(_, cell)| !cell.is_wall && !cell.visited)
                .min_by_key(|&(coord, cell)| (cell.distance, coord));
            let coord = match closest {
                Some((coord, cell)) if cell.distance != INFINITY => coord,
                // Everything left is either walled off or unreachable.
                _ => break,
            };
            if let Some(cell) = cells.get_point_mut(coord.point()) {
                cell.visited = true;
            }
            order.push(coord);
            if coord == target {
                break;
            }
            relax(grid, cells, coord);
        }
        order
    }
}
