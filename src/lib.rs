//! # dijkstra_grid
//!
//! The engine behind a grid visualizer for
//! [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm). A user paints
//! walls on a [Grid], triggers a search, and watches the order in which cells were finalized,
//! followed by the shortest path.
//!
//! The grid is a 4-connected uniform-cost graph. A search runs on its own copy of the cells, so
//! editing the grid never disturbs a [Run] that is already done. [animation] turns a run into
//! delayed per-cell updates for a rendering surface, and [Session] holds the state a render loop
//! keeps between frames.
//!
//! ```
//! use dijkstra_grid::{shortest_path, Coord, Grid, WallPattern};
//!
//! let grid = Grid::with_pattern(3, 3, Coord::new(0, 0), Coord::new(2, 2), WallPattern::Empty)?;
//! let grid = grid.toggle_wall(Coord::new(1, 1))?;
//! let run = shortest_path(&grid, grid.start(), grid.target())?;
//! assert_eq!(run.visitation_order()[0], grid.start());
//! assert_eq!(run.shortest_path().len(), 5);
//! # Ok::<(), dijkstra_grid::GridError>(())
//! ```
pub mod animation;
pub mod components;
pub mod error;
pub mod grid;
pub mod path;
pub mod session;
pub mod solver;

pub use animation::{AnimationTiming, Playback, Schedule, Surface, TextSurface, VisualState};
pub use components::Components;
pub use error::GridError;
pub use grid::{Cell, Coord, Grid, WallPattern, INFINITY};
pub use path::reconstruct_path;
pub use session::Session;
pub use solver::{shortest_path, HeapSolver, Run, ScanSolver, ShortestPathSolver};

/// Rows of the default grid.
pub const ROWS: usize = 25;
/// Columns of the default grid.
pub const COLS: usize = 70;
/// Start cell of the default grid.
pub const START: Coord = Coord::new(24, 55);
/// Target cell of the default grid.
pub const TARGET: Coord = Coord::new(24, 15);
