use std::cmp::Ordering;
use std::collections::BinaryHeap;

use grid_util::{Grid as _, SimpleGrid};

use crate::grid::{Cell, Coord, Grid};
use crate::solver::{relax, ShortestPathSolver};

struct SmallestDistanceHolder {
    distance: u32,
    coord: Coord,
}

impl Eq for SmallestDistanceHolder {}

impl PartialEq for SmallestDistanceHolder {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance && self.coord == other.coord
    }
}

impl PartialOrd for SmallestDistanceHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestDistanceHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the smallest distance, and among equal distances the
        // lowest row-major coordinate, matching the scan order of ScanSolver.
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.coord.cmp(&self.coord))
    }
}

/// Dijkstra backed by a [BinaryHeap]. Stale heap entries are skipped on pop instead of being
/// removed when a distance improves.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeapSolver;

impl ShortestPathSolver for HeapSolver {
    fn search(
        &self,
        grid: &Grid,
        cells: &mut SimpleGrid<Cell>,
        start: Coord,
        target: Coord,
    ) -> Vec<Coord> {
        let mut order = Vec::new();
        let mut to_see = BinaryHeap::new();
        to_see.push(SmallestDistanceHolder {
            distance: 0,
            coord: start,
        });
        while let Some(SmallestDistanceHolder { distance, coord }) = to_see.pop() {
            let Some(cell) = cells.get_point_mut(coord.point()) else {
                continue;
            };
            if cell.visited || distance > cell.distance {
                continue;
            }
            cell.visited = true;
            order.push(coord);
            if coord == target {
                break;
            }
            for improved in relax(grid, cells, coord) {
                to_see.push(SmallestDistanceHolder {
                    distance: distance + 1,
                    coord: improved,
                });
            }
        }
        order
    }
}
