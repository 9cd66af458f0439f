//! Example: BFS and DFS over the demo graph, replayed in real time.
//!
//! Run with:
//! `cargo run --example graph_search`

use algoviz::problems::graph::{Bfs, Dfs, Graph};
use algoviz::{Algorithm, Player};

fn main() {
    let bfs = Bfs::new(Graph::demo(), 0, Some(5));
    let mut player = Player::new(bfs);
    player.set_speed(100);
    player.start();
    player.run_to_completion();
    println!(
        "bfs: {} steps, path {}",
        player.total_steps(),
        player.answer().expect("playback completed")
    );

    let dfs = Dfs::new(Graph::demo(), 0, Some(5));
    let steps = dfs.produce();
    let order: Vec<i64> = steps.iter().filter_map(|s| s.current).collect();
    println!("dfs visit order: {order:?}");
    println!("dfs: {}", dfs.extract(&steps));
}
