use crate::error::GridError;
use crate::grid::{Coord, Grid};

/// Walks predecessor links back from `target` on a searched grid and returns the path in
/// start-to-target order.
///
/// A target without a predecessor yields `[target]` if it is the start cell or the search source
/// (the only cell at distance 0), and an empty path otherwise. The start is its own path even on
/// a grid that was never searched.
pub fn reconstruct_path(grid: &Grid, target: Coord) -> Result<Vec<Coord>, GridError> {
    let cell = grid.cell(target)?;
    if cell.predecessor.is_none() && cell.distance != 0 && !cell.is_start {
        return Ok(Vec::new());
    }
    let mut path = std::iter::successors(Some(target), |&coord| {
        grid.cell(coord).ok().and_then(|cell| cell.predecessor)
    })
    .collect::<Vec<Coord>>();
    path.reverse();
    Ok(path)
}
