use grid_util::{Grid as _, SimpleGrid};
use log::debug;
use smallvec::SmallVec;

use crate::error::GridError;
use crate::grid::{Cell, Coord, Grid};
use crate::path::reconstruct_path;

pub mod heap;
pub mod scan;

pub use heap::HeapSolver;
pub use scan::ScanSolver;

/// Outcome of one search: the order in which cells were finalized, and the searched copy of the
/// grid whose cells carry their final distance and predecessor.
#[derive(Clone, Debug)]
pub struct Run {
    grid: Grid,
    start: Coord,
    target: Coord,
    visitation_order: Vec<Coord>,
}

impl Run {
    /// Cells in the order their distance was finalized. Starts with the start cell and, if the
    /// target was reached, ends with it.
    pub fn visitation_order(&self) -> &[Coord] {
        &self.visitation_order
    }

    /// The grid as the search left it.
    pub fn solved_grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn target(&self) -> Coord {
        self.target
    }

    pub fn reached_target(&self) -> bool {
        self.visitation_order.last() == Some(&self.target)
    }

    /// Final distance from the start, if the cell was visited.
    pub fn distance_to(&self, coord: Coord) -> Option<u32> {
        self.grid
            .cell(coord)
            .ok()
            .filter(|cell| cell.visited)
            .map(|cell| cell.distance)
    }

    /// Start-to-target path along predecessor links; empty if the target was not reached.
    pub fn shortest_path(&self) -> Vec<Coord> {
        reconstruct_path(&self.grid, self.target).unwrap_or_default()
    }
}

/// A uniform-cost search over the 4-connected open cells of a [Grid].
///
/// Implementors only provide the selection loop in [search](Self::search). Validation, resetting
/// the cells and assembling the [Run] are shared, so every solver sees the same initial state.
pub trait ShortestPathSolver {
    /// Visits cells in order of increasing distance, ties going to the lowest row-major
    /// coordinate, until the target is visited or nothing reachable is left. `cells` arrive reset
    /// with the start at distance 0. Returns the visited coordinates in order.
    fn search(
        &self,
        grid: &Grid,
        cells: &mut SimpleGrid<Cell>,
        start: Coord,
        target: Coord,
    ) -> Vec<Coord>;

    /// Runs the search on a private copy of `grid`; later edits to `grid` cannot affect the
    /// returned [Run].
    fn solve(&self, grid: &Grid, start: Coord, target: Coord) -> Result<Run, GridError> {
        grid.cell(target)?;
        if grid.cell(start)?.is_wall {
            return Err(GridError::WallEndpoint { coord: start });
        }
        let mut cells = grid.storage().clone();
        for coord in grid.coords() {
            if let Some(cell) = cells.get_point_mut(coord.point()) {
                cell.reset_search();
                if coord == start {
                    cell.distance = 0;
                }
            }
        }

        let visitation_order = self.search(grid, &mut cells, start, target);
        let run = Run {
            grid: grid.with_cells(cells),
            start,
            target,
            visitation_order,
        };
        debug!(
            "visited {} of {} cells from {} to {}, target reached: {}",
            run.visitation_order.len(),
            grid.len(),
            start,
            target,
            run.reached_target()
        );
        Ok(run)
    }
}

/// Searches `grid` from `start` to `target` with the default solver.
pub fn shortest_path(grid: &Grid, start: Coord, target: Coord) -> Result<Run, GridError> {
    HeapSolver.solve(grid, start, target)
}

/// Offers `distance + 1` to every open, unvisited neighbour of `from`. Returns the neighbours
/// whose distance improved.
pub(crate) fn relax(
    grid: &Grid,
    cells: &mut SimpleGrid<Cell>,
    from: Coord,
) -> SmallVec<[Coord; 4]> {
    let mut improved = SmallVec::new();
    let Some(candidate) = cells.get_point(from.point()).map(|cell| cell.distance + 1) else {
        return improved;
    };
    for neighbour in grid.neighbours(from) {
        let Some(cell) = cells.get_point_mut(neighbour.point()) else {
            continue;
        };
        if cell.is_wall || cell.visited {
            continue;
        }
        if candidate < cell.distance {
            cell.distance = candidate;
            cell.predecessor = Some(from);
            improved.push(neighbour);
        }
    }
    improved
}
