use dijkstra_grid::{GridError, Session, TextSurface};
use std::thread;
use std::time::Duration;

// Replays a search on the default 25x70 grid in the terminal, where
// - S marks the start, T the target and # the staircase walls
// - o marks a visited cell and * the shortest path
//
// Run with RUST_LOG=debug to see the search statistics.
fn main() -> Result<(), GridError> {
    env_logger::init();
    let mut session = Session::default();
    let mut surface = TextSurface::for_grid(session.grid());
    let run = session.visualize(Duration::ZERO)?;

    let frame = Duration::from_millis(40);
    let mut now = Duration::ZERO;
    while session.is_animating() {
        now += frame;
        session.tick(now, &mut surface);
        print!("\x1B[2J\x1B[H{}", surface);
        thread::sleep(frame);
    }
    println!(
        "Visited {} cells, the shortest path has {} cells.",
        run.visitation_order().len(),
        run.shortest_path().len()
    );
    Ok(())
}
