use std::time::Duration;

use algoviz::player::{ManualClock, Phase, Player};
use algoviz::problems::dp::{Fibonacci, Knapsack};
use algoviz::problems::graph::{Bfs, Graph};
use algoviz::{Algorithm, Answer, PlayerBuilder};

const TICK: Duration = Duration::from_millis(200);

fn manual_player<A: Algorithm>(algorithm: A) -> (ManualClock, Player<A, ManualClock>) {
    let clock = ManualClock::new();
    let player = PlayerBuilder::new(algorithm)
        .with_speed(50)
        .with_clock(clock.clone())
        .build();
    (clock, player)
}

fn drive_to_completion<A: Algorithm>(clock: &ManualClock, player: &mut Player<A, ManualClock>) {
    let mut guard = 0;
    while !player.is_completed() {
        clock.advance(TICK);
        player.poll();
        guard += 1;
        assert!(guard < 10_000, "playback failed to terminate");
    }
}

#[test]
fn uninterrupted_and_paused_runs_agree() {
    let (clock, mut player) = manual_player(Fibonacci::new(15));
    player.start();
    drive_to_completion(&clock, &mut player);
    let uninterrupted = player.answer().cloned();

    let (clock, mut player) = manual_player(Fibonacci::new(15));
    player.start();
    for _ in 0..5 {
        clock.advance(TICK);
        player.poll();
    }
    player.pause();
    for _ in 0..7 {
        clock.advance(TICK);
        player.poll();
    }
    assert_eq!(player.phase(), Phase::Paused);
    player.start();
    drive_to_completion(&clock, &mut player);

    assert_eq!(player.answer().cloned(), uninterrupted);
    assert_eq!(uninterrupted, Some(Answer::Value(610)));
}

#[test]
fn step_index_never_exceeds_total() {
    let (clock, mut player) = manual_player(Knapsack::new(vec![2, 3, 4], vec![3, 4, 5], 8));
    player.start();
    let total = player.total_steps();
    for _ in 0..total * 3 {
        clock.advance(TICK);
        player.poll();
        assert!(player.step_index() <= total);
    }
    assert!(player.is_completed());
    assert_eq!(player.step_index(), total);
}

#[test]
fn progress_is_monotone_and_freezes_at_completion() {
    let (clock, mut player) = manual_player(Fibonacci::new(20));
    player.start();
    let mut prev = player.projection().progress;
    while !player.is_completed() {
        clock.advance(TICK);
        player.poll();
        let progress = player.projection().progress;
        assert!(progress >= prev, "progress went backwards");
        prev = progress;
    }
    assert_eq!(player.projection().progress, 100);
    // Further polls change nothing once completed.
    clock.advance(TICK * 4);
    player.poll();
    assert_eq!(player.projection().progress, 100);
    assert!(player.is_completed());
}

#[test]
fn reset_discards_everything() {
    let (clock, mut player) = manual_player(Fibonacci::new(10));
    player.start();
    for _ in 0..3 {
        clock.advance(TICK);
        player.poll();
    }
    player.reset();
    assert_eq!(player.phase(), Phase::Idle);
    assert_eq!(player.total_steps(), 0);
    assert_eq!(player.step_index(), 0);
    assert!(player.answer().is_none());
    assert_eq!(player.projection().progress, 0);
    assert!(player.projection().current_array.is_empty());

    // A reset player ignores stray ticks.
    clock.advance(TICK * 5);
    player.poll();
    assert_eq!(player.phase(), Phase::Idle);
}

#[test]
fn restart_supersedes_stale_run() {
    let (clock, mut player) = manual_player(Fibonacci::new(10));
    player.start();
    drive_to_completion(&clock, &mut player);
    assert_eq!(player.answer(), Some(&Answer::Value(55)));

    // Starting again replaces the completed run wholesale; the old
    // ticker and counters must not leak into the new one.
    player.start();
    assert_eq!(player.phase(), Phase::Running);
    assert_eq!(player.step_index(), 0);
    assert_eq!(player.projection().progress, 0);
    assert!(player.answer().is_none());
    drive_to_completion(&clock, &mut player);
    assert_eq!(player.answer(), Some(&Answer::Value(55)));
}

#[test]
fn pause_before_any_tick_holds_position() {
    let (clock, mut player) = manual_player(Fibonacci::new(10));
    player.start();
    player.pause();
    clock.advance(TICK * 10);
    player.poll();
    assert_eq!(player.step_index(), 0);
    player.start();
    drive_to_completion(&clock, &mut player);
    assert_eq!(player.answer(), Some(&Answer::Value(55)));
}

#[test]
fn speed_changes_apply_on_next_start() {
    let (clock, mut player) = manual_player(Fibonacci::new(10));
    player.start();
    player.set_speed(100);
    // The running interval is still the one captured at start.
    clock.advance(Duration::from_millis(100));
    player.poll();
    assert_eq!(player.step_index(), 0);
    clock.advance(Duration::from_millis(100));
    player.poll();
    assert_eq!(player.step_index(), 1);

    player.reset();
    player.start();
    clock.advance(Duration::from_millis(100));
    player.poll();
    assert_eq!(player.step_index(), 1, "new run uses the faster interval");
}

#[test]
fn projection_tracks_graph_steps() {
    let (clock, mut player) = manual_player(Bfs::new(Graph::demo(), 0, Some(5)));
    player.start();
    clock.advance(TICK);
    player.poll();
    let projection = player.projection();
    assert_eq!(projection.current, Some(0));
    assert_eq!(projection.current_indices, vec![0]);
    assert!(!projection.completed);

    drive_to_completion(&clock, &mut player);
    match player.answer() {
        Some(Answer::Path(path)) => {
            assert_eq!(path.first(), Some(&0));
            assert_eq!(path.last(), Some(&5));
        }
        other => panic!("unexpected answer {other:?}"),
    }
}

#[test]
fn completed_projection_reports_elapsed_time() {
    let (clock, mut player) = manual_player(Fibonacci::new(5));
    player.start();
    drive_to_completion(&clock, &mut player);
    // One tick per replayed step plus the completion tick.
    let ticks = (player.total_steps() + 1) as u32;
    assert_eq!(player.projection().time_elapsed, TICK * ticks);
}
