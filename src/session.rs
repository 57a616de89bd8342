use std::time::Duration;

use log::{info, warn};

use crate::animation::{AnimationTiming, Playback, Schedule, Surface};
use crate::components::Components;
use crate::error::GridError;
use crate::grid::{Coord, Grid, WallPattern};
use crate::solver::{shortest_path, Run};

/// State owned by the render loop: the current grid snapshot, whether the mouse is held down for
/// wall painting, and the playbacks still being replayed.
///
/// Playbacks cannot be cancelled. Starting a run while another one is still replaying makes the
/// two replays interleave on the surface.
#[derive(Clone, Debug)]
pub struct Session {
    grid: Grid,
    mouse_pressed: bool,
    timing: AnimationTiming,
    playbacks: Vec<Playback>,
}

impl Default for Session {
    fn default() -> Session {
        Session::new(Grid::default(), AnimationTiming::default())
    }
}

impl Session {
    pub fn new(grid: Grid, timing: AnimationTiming) -> Session {
        Session {
            grid,
            mouse_pressed: false,
            timing,
            playbacks: Vec::new(),
        }
    }

    /// The current snapshot. Compare against a previously rendered one with
    /// [Grid::same_snapshot] to decide whether to repaint.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    pub fn timing(&self) -> &AnimationTiming {
        &self.timing
    }

    /// Press: toggles the wall under the pointer and starts a drag.
    pub fn mouse_down(&mut self, coord: Coord) -> Result<(), GridError> {
        self.grid = self.grid.toggle_wall(coord)?;
        self.mouse_pressed = true;
        Ok(())
    }

    /// Drag-enter: toggles the wall only while the mouse is held down.
    pub fn mouse_enter(&mut self, coord: Coord) -> Result<(), GridError> {
        if self.mouse_pressed {
            self.grid = self.grid.toggle_wall(coord)?;
        }
        Ok(())
    }

    pub fn mouse_up(&mut self) {
        self.mouse_pressed = false;
    }

    /// Searches the current snapshot between its start and target and schedules the replay,
    /// anchored at `now`.
    pub fn visualize(&mut self, now: Duration) -> Result<Run, GridError> {
        let (start, target) = (self.grid.start(), self.grid.target());
        if self.is_animating() {
            warn!(
                "{} playback(s) still running, the new replay will interleave with them",
                self.playbacks.len()
            );
        }
        if Components::new(&self.grid).unreachable(start, target) {
            warn!("target {} is walled off from start {}", target, start);
        }
        info!("visualizing Dijkstra from {} to {}", start, target);
        let run = shortest_path(&self.grid, start, target)?;
        let path = run.shortest_path();
        let schedule = Schedule::for_run(run.visitation_order(), &path, &self.timing);
        self.playbacks.push(Playback::new(schedule, now));
        Ok(run)
    }

    /// Overlays the staircase on the current grid and schedules the new walls to be drawn one by
    /// one. Returns the walls that were added; when there are none, nothing is scheduled.
    pub fn stair_demonstration(&mut self, now: Duration) -> Vec<Coord> {
        let (grid, placed) = self.grid.with_walls(WallPattern::Staircase);
        info!("stair demonstration placed {} walls", placed.len());
        self.grid = grid;
        if !placed.is_empty() {
            let schedule = Schedule::for_walls(&placed, self.timing.wall_step);
            self.playbacks.push(Playback::new(schedule, now));
        }
        placed
    }

    /// Advances every playback to `now` and drops the finished ones. Returns the number of
    /// updates painted.
    pub fn tick<S: Surface + ?Sized>(&mut self, now: Duration, surface: &mut S) -> usize {
        let painted: usize = self
            .playbacks
            .iter_mut()
            .map(|playback| playback.advance(now, &mut *surface))
            .sum();
        self.playbacks.retain(|playback| !playback.is_finished());
        painted
    }

    pub fn is_animating(&self) -> bool {
        !self.playbacks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{TextSurface, VisualState};

    fn small_session() -> Session {
        let grid = Grid::with_pattern(
            3,
            3,
            Coord::new(0, 0),
            Coord::new(2, 2),
            WallPattern::Empty,
        )
        .unwrap();
        Session::new(grid, AnimationTiming::default())
    }

    #[test]
    fn drag_paints_walls_only_while_pressed() {
        let mut session = small_session();
        session.mouse_enter(Coord::new(0, 1)).unwrap();
        assert!(!session.grid().is_wall(Coord::new(0, 1)));

        let before = session.grid().clone();
        session.mouse_down(Coord::new(1, 1)).unwrap();
        assert!(session.mouse_pressed());
        assert!(!Grid::same_snapshot(&before, session.grid()));
        session.mouse_enter(Coord::new(1, 0)).unwrap();
        session.mouse_up();
        session.mouse_enter(Coord::new(0, 1)).unwrap();

        let walls = session
            .grid()
            .cells()
            .filter(|c| c.is_wall)
            .map(|c| c.coord())
            .collect::<Vec<_>>();
        assert_eq!(walls, vec![Coord::new(1, 0), Coord::new(1, 1)]);
    }

    #[test]
    fn pressing_an_endpoint_keeps_the_snapshot() {
        let mut session = small_session();
        let before = session.grid().clone();
        session.mouse_down(Coord::new(0, 0)).unwrap();
        assert!(session.mouse_pressed());
        assert!(Grid::same_snapshot(&before, session.grid()));
    }

    #[test]
    fn out_of_bounds_press_is_rejected() {
        let mut session = small_session();
        assert!(session.mouse_down(Coord::new(3, 0)).is_err());
        assert!(!session.mouse_pressed());
    }

    #[test]
    fn visualize_replays_visits_then_path() {
        let mut session = small_session();
        let run = session.visualize(Duration::ZERO).unwrap();
        assert!(session.is_animating());
        let mut surface = TextSurface::for_grid(session.grid());

        let visits = run.visitation_order().len();
        let painted = session.tick(Duration::from_millis(10 * (visits as u64 - 1)), &mut surface);
        assert_eq!(painted, visits);
        assert_eq!(surface.count(VisualState::Visited), visits);

        session.tick(Duration::from_secs(10), &mut surface);
        assert!(!session.is_animating());
        assert_eq!(surface.count(VisualState::ShortestPath), 5);
    }

    #[test]
    fn edits_after_a_run_do_not_change_it() {
        let mut session = small_session();
        let run = session.visualize(Duration::ZERO).unwrap();
        session.mouse_down(Coord::new(1, 1)).unwrap();
        assert!(!run.solved_grid().is_wall(Coord::new(1, 1)));
        assert_eq!(run.shortest_path().len(), 5);
    }

    #[test]
    fn overlapping_runs_interleave() {
        let mut session = small_session();
        session.visualize(Duration::ZERO).unwrap();
        session.visualize(Duration::from_millis(5)).unwrap();
        let mut surface = TextSurface::for_grid(session.grid());
        assert_eq!(session.tick(Duration::from_millis(5), &mut surface), 2);
    }

    #[test]
    fn stair_demonstration_draws_walls() {
        let grid = Grid::with_pattern(
            5,
            8,
            Coord::new(0, 0),
            Coord::new(4, 7),
            WallPattern::Empty,
        )
        .unwrap();
        let mut session = Session::new(grid, AnimationTiming::default());
        let placed = session.stair_demonstration(Duration::ZERO);
        assert_eq!(placed.len(), 7);
        assert!(placed.iter().all(|&c| session.grid().is_wall(c)));

        let mut surface = TextSurface::new(5, 8);
        session.tick(Duration::from_secs(1), &mut surface);
        assert_eq!(surface.count(VisualState::Wall), 7);
        assert!(session.stair_demonstration(Duration::ZERO).is_empty());
    }

    #[test]
    fn stair_demonstration_without_new_walls_schedules_nothing() {
        let grid = Grid::with_pattern(
            1,
            3,
            Coord::new(0, 0),
            Coord::new(0, 2),
            WallPattern::Empty,
        )
        .unwrap();
        let mut session = Session::new(grid, AnimationTiming::default());
        assert!(session.stair_demonstration(Duration::ZERO).is_empty());
        assert!(!session.is_animating());
        session.visualize(Duration::ZERO).unwrap();
        let mut surface = TextSurface::for_grid(session.grid());
        session.tick(Duration::from_secs(1), &mut surface);
        assert!(!session.is_animating());
    }
}
