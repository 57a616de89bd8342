//! Replays a [Run](crate::Run) as a sequence of delayed per-cell updates. Nothing here touches
//! the search state of a cell; updates only carry a coordinate and the state to paint.
use core::fmt;
use std::time::Duration;

use crate::grid::{Cell, Coord, Grid};

/// What a rendering surface shows for one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VisualState {
    #[default]
    Default,
    Start,
    Target,
    Wall,
    Visited,
    ShortestPath,
}

impl VisualState {
    /// The resting state of a cell, before any animation.
    pub fn of(cell: &Cell) -> VisualState {
        if cell.is_start {
            VisualState::Start
        } else if cell.is_target {
            VisualState::Target
        } else if cell.is_wall {
            VisualState::Wall
        } else {
            VisualState::Default
        }
    }

    pub fn symbol(self) -> char {
        match self {
            VisualState::Default => '.',
            VisualState::Start => 'S',
            VisualState::Target => 'T',
            VisualState::Wall => '#',
            VisualState::Visited => 'o',
            VisualState::ShortestPath => '*',
        }
    }
}

/// Anything that can show a [VisualState] per `(row, col)`.
pub trait Surface {
    fn paint(&mut self, coord: Coord, state: VisualState);
}

/// Paints the resting state of every cell of `grid`.
pub fn paint_grid<S: Surface + ?Sized>(grid: &Grid, surface: &mut S) {
    for cell in grid.cells() {
        surface.paint(cell.coord(), VisualState::of(cell));
    }
}

/// In-memory surface, printable as one character per cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextSurface {
    rows: usize,
    cols: usize,
    states: Vec<VisualState>,
}

impl TextSurface {
    pub fn new(rows: usize, cols: usize) -> TextSurface {
        TextSurface {
            rows,
            cols,
            states: vec![VisualState::Default; rows * cols],
        }
    }

    /// A surface sized to `grid` with its resting states painted.
    pub fn for_grid(grid: &Grid) -> TextSurface {
        let mut surface = TextSurface::new(grid.rows(), grid.cols());
        paint_grid(grid, &mut surface);
        surface
    }

    pub fn get(&self, coord: Coord) -> Option<VisualState> {
        if coord.row < self.rows && coord.col < self.cols {
            Some(self.states[coord.row * self.cols + coord.col])
        } else {
            None
        }
    }

    pub fn count(&self, state: VisualState) -> usize {
        self.states.iter().filter(|&&s| s == state).count()
    }
}

impl Surface for TextSurface {
    /// Out-of-bounds coordinates are ignored.
    fn paint(&mut self, coord: Coord, state: VisualState) {
        if coord.row < self.rows && coord.col < self.cols {
            self.states[coord.row * self.cols + coord.col] = state;
        }
    }
}

impl fmt::Display for TextSurface {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.states.chunks(self.cols.max(1)) {
            let line = row.iter().map(|s| s.symbol()).collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Per-step delays of the replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationTiming {
    pub visit_step: Duration,
    pub path_step: Duration,
    pub wall_step: Duration,
}

impl Default for AnimationTiming {
    fn default() -> AnimationTiming {
        AnimationTiming {
            visit_step: Duration::from_millis(10),
            path_step: Duration::from_millis(50),
            wall_step: Duration::from_millis(10),
        }
    }
}

/// One delayed paint, `at` measured from the start of its [Schedule].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Update {
    pub at: Duration,
    pub coord: Coord,
    pub state: VisualState,
}

/// Updates sorted by time. Each update is independent; replay order follows from the delays alone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schedule {
    updates: Vec<Update>,
}

impl Schedule {
    /// Visited cells every `visit_step`, then, once the last one has had its slot, the path every
    /// `path_step`.
    pub fn for_run(
        visitation_order: &[Coord],
        path: &[Coord],
        timing: &AnimationTiming,
    ) -> Schedule {
        let path_offset = timing.visit_step * visitation_order.len() as u32;
        let visited = visitation_order
            .iter()
            .enumerate()
            .map(|(i, &coord)| Update {
                at: timing.visit_step * i as u32,
                coord,
                state: VisualState::Visited,
            });
        let path = path.iter().enumerate().map(|(i, &coord)| Update {
            at: path_offset + timing.path_step * i as u32,
            coord,
            state: VisualState::ShortestPath,
        });
        Schedule {
            updates: visited.chain(path).collect(),
        }
    }

    /// Walls drawn one per `step`.
    pub fn for_walls(coords: &[Coord], step: Duration) -> Schedule {
        Schedule {
            updates: coords
                .iter()
                .enumerate()
                .map(|(i, &coord)| Update {
                    at: step * i as u32,
                    coord,
                    state: VisualState::Wall,
                })
                .collect(),
        }
    }

    pub fn updates(&self) -> &[Update] {
        &self.updates
    }

    pub fn len(&self) -> usize {
        self.updates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    /// Time of the last update.
    pub fn duration(&self) -> Duration {
        self.updates.last().map_or(Duration::ZERO, |u| u.at)
    }
}

/// A [Schedule] being replayed by a render loop, anchored at the time it was started.
#[derive(Clone, Debug)]
pub struct Playback {
    schedule: Schedule,
    started_at: Duration,
    cursor: usize,
}

impl Playback {
    pub fn new(schedule: Schedule, started_at: Duration) -> Playback {
        Playback {
            schedule,
            started_at,
            cursor: 0,
        }
    }

    /// Paints every update that is due at `now` and has not been painted yet. Returns how many
    /// were painted.
    pub fn advance<S: Surface + ?Sized>(&mut self, now: Duration, surface: &mut S) -> usize {
        let Some(elapsed) = now.checked_sub(self.started_at) else {
            return 0;
        };
        let due = self.schedule.updates[self.cursor..]
            .iter()
            .take_while(|u| u.at <= elapsed);
        let mut painted = 0;
        for update in due {
            surface.paint(update.coord, update.state);
            painted += 1;
        }
        self.cursor += painted;
        painted
    }

    pub fn is_finished(&self) -> bool {
        self.cursor == self.schedule.len()
    }

    pub fn remaining(&self) -> usize {
        self.schedule.len() - self.cursor
    }
}

/// Replays `schedule` in one go, calling `sleep` with the gap before each due update.
pub fn play_blocking<S, F>(schedule: &Schedule, surface: &mut S, mut sleep: F)
where
    S: Surface + ?Sized,
    F: FnMut(Duration),
{
    let mut elapsed = Duration::ZERO;
    for update in schedule.updates() {
        if update.at > elapsed {
            sleep(update.at - elapsed);
            elapsed = update.at;
        }
        surface.paint(update.coord, update.state);
    }
}
