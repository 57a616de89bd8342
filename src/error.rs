use thiserror::Error;

use crate::grid::Coord;

/// Errors raised when an operation would break the grid's invariants.
///
/// An unreachable target is not an error: it shows up as an empty path.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The coordinate lies outside the `rows × cols` bounds of the grid.
    #[error("cell {coord} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        coord: Coord,
        rows: usize,
        cols: usize,
    },
    /// A grid needs at least one row and one column to hold start and target.
    #[error("grid dimensions must be non-zero")]
    EmptyGrid,
    /// The search cannot start from a wall.
    #[error("cell {coord} is a wall and cannot start a search")]
    WallEndpoint { coord: Coord },
}
