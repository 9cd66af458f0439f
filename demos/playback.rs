//! Example: driving playback by hand with a manual clock, including a
//! pause in the middle of the run.
//!
//! Run with:
//! `cargo run --example playback`

use std::time::Duration;

use algoviz::player::{ManualClock, Player};
use algoviz::problems::math::Gcd;
use algoviz::PlayerBuilder;

fn main() {
    let clock = ManualClock::new();
    let mut player: Player<Gcd, ManualClock> = PlayerBuilder::new(Gcd::new(48, 18))
        .with_speed(50)
        .with_clock(clock.clone())
        .build();

    player.start();
    println!("started: {} steps to replay", player.total_steps());

    let tick = Duration::from_millis(200);
    clock.advance(tick);
    player.poll();
    println!(
        "after one tick: step {} / {}, progress {}%",
        player.step_index(),
        player.total_steps(),
        player.projection().progress
    );

    player.pause();
    clock.advance(tick * 3);
    player.poll();
    println!("paused: still at step {}", player.step_index());

    player.start();
    while !player.is_completed() {
        clock.advance(tick);
        player.poll();
    }
    println!(
        "completed in {:?} simulated, answer: {}",
        player.projection().time_elapsed,
        player.answer().expect("completed run has an answer")
    );
}
