//! Assorted timing and progress arithmetic helpers.

use std::time::Duration;

/// Clamp a user speed factor into the supported 1..=100 range.
#[inline]
pub fn clamp_speed(speed: u32) -> u32 {
    speed.clamp(1, 100)
}

/// Tick interval for a speed factor: `1000 / (speed / 10)` ms.
///
/// Speed 100 replays ten steps per second; speed 1 one step every
/// ten seconds.
#[inline]
pub fn tick_interval(speed: u32) -> Duration {
    let speed = clamp_speed(speed);
    Duration::from_secs_f64(10.0 / f64::from(speed))
}

/// Rounded percentage of steps replayed so far.
///
/// An empty sequence reports 100: there is nothing left to replay.
#[inline]
pub fn progress_percent(step_index: usize, total_steps: usize) -> u32 {
    if total_steps == 0 {
        return 100;
    }
    let pct = step_index as f64 / total_steps as f64 * 100.0;
    pct.round() as u32
}
