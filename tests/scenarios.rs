use dijkstra_grid::{
    reconstruct_path, shortest_path, Coord, Grid, GridError, WallPattern, COLS, ROWS, START,
    TARGET,
};

fn coords(list: &[(usize, usize)]) -> Vec<Coord> {
    list.iter().copied().map(Coord::from).collect()
}

#[test]
fn open_three_by_three() {
    let grid = Grid::with_pattern(3, 3, Coord::new(0, 0), Coord::new(2, 2), WallPattern::Empty)
        .unwrap();
    let run = shortest_path(&grid, grid.start(), grid.target()).unwrap();
    let path = reconstruct_path(run.solved_grid(), grid.target()).unwrap();
    // Manhattan distance + 1
    assert_eq!(path.len(), 5);
    assert_eq!(path, run.shortest_path());
}

#[test]
fn start_equals_target() {
    let at = Coord::new(2, 3);
    let grid = Grid::with_pattern(4, 4, at, at, WallPattern::Staircase).unwrap();
    let cell = grid.cell(at).unwrap();
    assert!(cell.is_start && cell.is_target && !cell.is_wall);
    let run = shortest_path(&grid, at, at).unwrap();
    assert_eq!(run.visitation_order(), &[at]);
    assert_eq!(run.shortest_path(), vec![at]);
}

#[test]
fn walled_in_target_terminates() {
    // ......
    // ...###
    // ...#T#
    // S..###
    let mut grid = Grid::with_pattern(4, 6, Coord::new(3, 0), Coord::new(2, 4), WallPattern::Empty)
        .unwrap();
    for wall in coords(&[(1, 3), (1, 4), (1, 5), (2, 3), (2, 5), (3, 3), (3, 4), (3, 5)]) {
        grid = grid.toggle_wall(wall).unwrap();
    }
    let run = shortest_path(&grid, grid.start(), grid.target()).unwrap();
    assert!(run.shortest_path().is_empty());
    assert_eq!(run.visitation_order().len(), 24 - 8 - 1);
}

#[test]
fn columns_preset_blocks_the_default_endpoints() {
    let grid = Grid::with_pattern(ROWS, COLS, START, TARGET, WallPattern::Columns { period: 14 })
        .unwrap();
    let run = shortest_path(&grid, START, TARGET).unwrap();
    assert!(run.shortest_path().is_empty());
    // Start sits between the walls at columns 42 and 56.
    assert_eq!(run.visitation_order().len(), ROWS * 13);

    // Knocking a hole into each wall in between opens the way.
    let mut grid = grid;
    for col in [28, 42] {
        grid = grid.toggle_wall(Coord::new(ROWS - 1, col)).unwrap();
    }
    let path = shortest_path(&grid, START, TARGET).unwrap().shortest_path();
    assert_eq!(path.len(), 55 - 15 + 1);
}

#[test]
fn invalid_coordinates_fail_fast() {
    let grid = Grid::default();
    let outside = Coord::new(ROWS, 0);
    assert!(matches!(grid.toggle_wall(outside), Err(GridError::OutOfBounds { .. })));
    assert!(matches!(grid.cell(outside), Err(GridError::OutOfBounds { .. })));
    assert!(matches!(
        shortest_path(&grid, START, outside),
        Err(GridError::OutOfBounds { .. })
    ));
    assert!(reconstruct_path(&grid, outside).is_err());
}
