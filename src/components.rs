use petgraph::unionfind::UnionFind;

use crate::grid::{Coord, Grid};

/// Connected components of the open cells of a [Grid], 4-connected. Answers whether a search can
/// possibly reach one cell from another without running it.
#[derive(Clone, Debug)]
pub struct Components {
    grid: Grid,
    components: UnionFind<usize>,
}

impl Components {
    /// Generates a new [UnionFind] structure and links up open grid neighbours to the same
    /// component. Walls stay in singleton components.
    pub fn new(grid: &Grid) -> Components {
        let mut components = UnionFind::new(grid.len());
        for cell in grid.cells().filter(|cell| !cell.is_wall) {
            let coord = cell.coord();
            let parent_ix = grid.ix(coord);
            // Down and right suffice, the other two directions are covered from the neighbour.
            [
                Coord::new(coord.row + 1, coord.col),
                Coord::new(coord.row, coord.col + 1),
            ]
            .into_iter()
            .filter(|&n| grid.in_bounds(n) && !grid.is_wall(n))
            .for_each(|n| {
                components.union(parent_ix, grid.ix(n));
            });
        }
        Components {
            grid: grid.clone(),
            components,
        }
    }

    /// Checks if `a` and `b` are open cells on the same component. Every cell reaches itself.
    pub fn reachable(&self, a: Coord, b: Coord) -> bool {
        if !self.grid.in_bounds(a) || !self.grid.in_bounds(b) {
            return false;
        }
        if a == b {
            return true;
        }
        !self.grid.is_wall(a)
            && !self.grid.is_wall(b)
            && self.components.equiv(self.grid.ix(a), self.grid.ix(b))
    }

    pub fn unreachable(&self, a: Coord, b: Coord) -> bool {
        !self.reachable(a, b)
    }

    /// Number of cells reachable from `coord`, itself included. Zero for walls and out of bounds.
    pub fn component_size(&self, coord: Coord) -> usize {
        if !self.grid.in_bounds(coord) || self.grid.is_wall(coord) {
            return 0;
        }
        let root = self.components.find(self.grid.ix(coord));
        self.grid
            .coords()
            .filter(|&c| self.components.find(self.grid.ix(c)) == root)
            .count()
    }
}
