use core::fmt;
use std::sync::Arc;

use grid_util::{Grid as _, Point, SimpleGrid};
use itertools::iproduct;
use smallvec::SmallVec;

use crate::error::GridError;
use crate::{COLS, ROWS, START, TARGET};

/// Tentative distance of a cell the search has not reached.
pub const INFINITY: u32 = u32::MAX;

/// A `(row, col)` handle into a [Grid]. Predecessor links are stored as coordinates rather than
/// references, so the cells themselves stay plain values owned by the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }
}

impl Coord {
    /// The [Point] addressing this cell in grid storage: `x` is the column, `y` the row.
    /// Coordinates too large for `i32` map to a point that is out of bounds everywhere.
    pub fn point(self) -> Point {
        let x = i32::try_from(self.col).unwrap_or(-1);
        let y = i32::try_from(self.row).unwrap_or(-1);
        Point::new(x, y)
    }

    pub(crate) fn from_point(point: Point) -> Coord {
        Coord::new(point.y as usize, point.x as usize)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Coord {
        Coord::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One grid position. The wall flag belongs to the user, `distance`, `visited` and `predecessor`
/// belong to the search and only carry meaning on the grid returned inside a [Run](crate::Run).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub is_start: bool,
    pub is_target: bool,
    pub is_wall: bool,
    pub distance: u32,
    pub visited: bool,
    pub predecessor: Option<Coord>,
}

impl Cell {
    fn new(coord: Coord, start: Coord, target: Coord) -> Cell {
        Cell {
            row: coord.row,
            col: coord.col,
            is_start: coord == start,
            is_target: coord == target,
            is_wall: false,
            distance: INFINITY,
            visited: false,
            predecessor: None,
        }
    }

    pub fn coord(&self) -> Coord {
        Coord::new(self.row, self.col)
    }

    /// Start and target cells can never become walls.
    pub fn is_endpoint(&self) -> bool {
        self.is_start || self.is_target
    }

    pub(crate) fn reset_search(&mut self) {
        self.distance = INFINITY;
        self.visited = false;
        self.predecessor = None;
    }
}

/// Fixed wall layouts applied when a grid is created, or overlaid later.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WallPattern {
    Empty,
    /// Every column whose index is a multiple of `period` is walled off.
    Columns { period: usize },
    /// Three diagonal runs: up from the bottom-left corner, down towards the bottom edge, then up
    /// again towards the right edge.
    #[default]
    Staircase,
}

impl WallPattern {
    /// The cells this pattern walls on a `rows × cols` grid, in the order they are placed.
    pub fn coords(&self, rows: usize, cols: usize) -> Vec<Coord> {
        match *self {
            WallPattern::Empty => Vec::new(),
            WallPattern::Columns { period } if period > 0 => iproduct!(0..rows, 0..cols)
                .filter(|&(_, col)| col % period == 0)
                .map(Coord::from)
                .collect(),
            WallPattern::Columns { .. } => Vec::new(),
            WallPattern::Staircase => staircase(rows, cols),
        }
    }
}

fn staircase(rows: usize, cols: usize) -> Vec<Coord> {
    let (rows, cols) = (rows as i64, cols as i64);
    let mut placed = Vec::new();
    let mut row = rows - 1;
    let mut col = 0;
    let mut place = |row: i64, col: i64| placed.push(Coord::new(row as usize, col as usize));
    while row > 0 && col < cols {
        place(row, col);
        row -= 1;
        col += 1;
    }
    while row < rows - 2 && col < cols {
        place(row, col);
        row += 1;
        col += 1;
    }
    while row > 0 && col < cols - 1 {
        place(row, col);
        row -= 1;
        col += 1;
    }
    placed
}

/// A fixed-size grid of [Cell]s with exactly one start and one target, stored in a
/// [SimpleGrid] whose width is the number of columns and height the number of rows.
///
/// The cells live in a shared immutable snapshot. Every edit returns a new [Grid] with fresh
/// storage and leaves the original untouched, so a render loop can detect a change with
/// [Grid::same_snapshot] and a search never observes edits made after it started.
#[derive(Clone, Debug)]
pub struct Grid {
    start: Coord,
    target: Coord,
    cells: Arc<SimpleGrid<Cell>>,
}

impl Default for Grid {
    /// The `ROWS × COLS` layout with the staircase preset between [START] and [TARGET].
    fn default() -> Grid {
        Grid::build(ROWS, COLS, START, TARGET, WallPattern::Staircase)
    }
}

impl Grid {
    /// Creates a grid with the default staircase walls.
    pub fn new(rows: usize, cols: usize, start: Coord, target: Coord) -> Result<Grid, GridError> {
        Grid::with_pattern(rows, cols, start, target, WallPattern::default())
    }

    /// Creates a grid with the given wall preset. Start and target cells are never walled.
    pub fn with_pattern(
        rows: usize,
        cols: usize,
        start: Coord,
        target: Coord,
        pattern: WallPattern,
    ) -> Result<Grid, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        for coord in [start, target] {
            if coord.row >= rows || coord.col >= cols {
                return Err(GridError::OutOfBounds { coord, rows, cols });
            }
        }
        Ok(Grid::build(rows, cols, start, target, pattern))
    }

    fn build(rows: usize, cols: usize, start: Coord, target: Coord, pattern: WallPattern) -> Grid {
        let mut cells = SimpleGrid::new(cols, rows, Cell::new(Coord::default(), start, target));
        for (row, col) in iproduct!(0..rows, 0..cols) {
            let coord = Coord::new(row, col);
            if let Some(cell) = cells.get_point_mut(coord.point()) {
                *cell = Cell::new(coord, start, target);
            }
        }
        for coord in pattern.coords(rows, cols) {
            if let Some(cell) = cells.get_point_mut(coord.point()) {
                cell.is_wall = !cell.is_endpoint();
            }
        }
        Grid {
            start,
            target,
            cells: Arc::new(cells),
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.height()
    }
    pub fn cols(&self) -> usize {
        self.cells.width()
    }
    pub fn start(&self) -> Coord {
        self.start
    }
    pub fn target(&self) -> Coord {
        self.target
    }
    pub fn len(&self) -> usize {
        self.rows() * self.cols()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        self.cells.point_in_bounds(coord.point())
    }

    /// Index of an in-bounds coordinate in the underlying storage, in `0..len()`.
    pub(crate) fn ix(&self, coord: Coord) -> usize {
        self.cells.get_ix_point(&coord.point())
    }

    pub fn cell(&self, coord: Coord) -> Result<&Cell, GridError> {
        self.cells
            .get_point(coord.point())
            .ok_or(GridError::OutOfBounds {
                coord,
                rows: self.rows(),
                cols: self.cols(),
            })
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        iproduct!(0..self.rows(), 0..self.cols()).map(Coord::from)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.coords()
            .filter_map(move |coord| self.cells.get_point(coord.point()))
    }

    pub fn is_wall(&self, coord: Coord) -> bool {
        self.cells
            .get_point(coord.point())
            .map_or(false, |cell| cell.is_wall)
    }

    /// The in-bounds 4-neighbourhood of `coord`.
    pub fn neighbours(&self, coord: Coord) -> SmallVec<[Coord; 4]> {
        coord
            .point()
            .neumann_neighborhood_smallvec()
            .into_iter()
            .filter(|p| self.cells.point_in_bounds(*p))
            .map(Coord::from_point)
            .collect()
    }

    /// Returns a grid with the wall at `coord` inverted. Toggling the start or target is a no-op
    /// and hands back the same snapshot.
    pub fn toggle_wall(&self, coord: Coord) -> Result<Grid, GridError> {
        if self.cell(coord)?.is_endpoint() {
            return Ok(self.clone());
        }
        let mut cells = self.storage().clone();
        if let Some(cell) = cells.get_point_mut(coord.point()) {
            cell.is_wall = !cell.is_wall;
        }
        Ok(self.with_cells(cells))
    }

    /// Overlays `pattern` on this grid and returns the new grid together with the cells that were
    /// turned into walls, in placement order.
    pub fn with_walls(&self, pattern: WallPattern) -> (Grid, Vec<Coord>) {
        let mut cells = self.storage().clone();
        let mut placed = Vec::new();
        for coord in pattern.coords(self.rows(), self.cols()) {
            if let Some(cell) = cells.get_point_mut(coord.point()) {
                if !cell.is_endpoint() && !cell.is_wall {
                    cell.is_wall = true;
                    placed.push(coord);
                }
            }
        }
        (self.with_cells(cells), placed)
    }

    pub(crate) fn storage(&self) -> &SimpleGrid<Cell> {
        &self.cells
    }

    /// Same dimensions and endpoints, new storage.
    pub(crate) fn with_cells(&self, cells: SimpleGrid<Cell>) -> Grid {
        debug_assert_eq!(cells.width(), self.cols());
        debug_assert_eq!(cells.height(), self.rows());
        Grid {
            start: self.start,
            target: self.target,
            cells: Arc::new(cells),
        }
    }

    /// Checks whether two grids share the same cell storage, i.e. neither was edited since one
    /// was cloned from the other.
    pub fn same_snapshot(a: &Grid, b: &Grid) -> bool {
        Arc::ptr_eq(&a.cells, &b.cells)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows() {
            let line = (0..self.cols())
                .filter_map(|col| self.cells.get_point(Coord::new(row, col).point()))
                .map(|cell| {
                    if cell.is_start {
                        'S'
                    } else if cell.is_target {
                        'T'
                    } else if cell.is_wall {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
