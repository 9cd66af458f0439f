//! Timed playback driver over a recorded step sequence.
//!
//! The driver owns the full lifecycle of one run:
//! 1. `start` computes the step sequence eagerly via the producer.
//! 2. A single repeating [`Ticker`] paces replay; each due tick
//!    advances exactly one step and folds it into the live
//!    [`Projection`] renderers consume.
//! 3. Reaching the end freezes progress at 100, extracts the final
//!    answer, and cancels the ticker.
//!
//! Transitions form an explicit state machine:
//! `Idle -> Running <-> Paused -> Completed -> Idle (reset)`.
//! Pause is a polling pause: the ticker keeps firing, paused ticks
//! are consumed and skipped. Starting a fresh run always cancels the
//! previous ticker first, so at most one timer is live per player.
//!
//! Time comes from a [`Clock`], so tests drive playback with a
//! [`ManualClock`] instead of waiting on wall time.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::answer::Answer;
use crate::step::Step;
use crate::traits::Algorithm;
use crate::utils::{clamp_speed, progress_percent, tick_interval};

/// Source of the current instant. Implemented by [`SystemClock`] for
/// wall time and [`ManualClock`] for deterministic tests.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Hand-driven clock; clones share the same underlying instant, so a
/// test can hold one handle and advance the player's copy.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Playback lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Paused,
    Completed,
}

/// One cancellable repeating deadline. Cancellation is dropping it;
/// the player holds at most one at a time.
#[derive(Debug, Clone, Copy)]
struct Ticker {
    interval: Duration,
    deadline: Instant,
}

impl Ticker {
    fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            deadline: now + interval,
        }
    }

    fn due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    fn rearm(&mut self, now: Instant) {
        self.deadline = now + self.interval;
    }
}

/// Live projection of the current run, the record renderers consume.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Projection {
    pub progress: u32,
    pub comparisons: u64,
    pub swaps: u64,
    pub time_elapsed: Duration,
    pub current_array: Vec<i64>,
    pub current_indices: Vec<usize>,
    pub completed: bool,
    pub dp: Option<Vec<Vec<i64>>>,
    pub current: Option<i64>,
    pub current_col: Option<i64>,
}

/// Playback driver over one [`Algorithm`] instance.
///
/// ```
/// use algoviz::player::{ManualClock, Player};
/// use algoviz::problems::dp::Fibonacci;
/// use algoviz::Answer;
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// let mut player = Player::with_clock(Fibonacci::new(10), clock.clone());
/// player.start();
/// while !player.is_completed() {
///     clock.advance(Duration::from_millis(200));
///     player.poll();
/// }
/// assert_eq!(player.answer(), Some(&Answer::Value(55)));
/// ```
pub struct Player<A: Algorithm, C: Clock = SystemClock> {
    algorithm: A,
    clock: C,
    speed: u32,
    phase: Phase,
    steps: Vec<Step>,
    cursor: usize,
    ticker: Option<Ticker>,
    started_at: Option<Instant>,
    projection: Projection,
    answer: Option<Answer>,
}

impl<A: Algorithm> Player<A, SystemClock> {
    /// Player on wall-clock time at the default speed factor (50).
    pub fn new(algorithm: A) -> Self {
        Self::with_clock(algorithm, SystemClock)
    }
}

impl<A: Algorithm, C: Clock> Player<A, C> {
    pub fn with_clock(algorithm: A, clock: C) -> Self {
        Self {
            algorithm,
            clock,
            speed: 50,
            phase: Phase::Idle,
            steps: Vec::new(),
            cursor: 0,
            ticker: None,
            started_at: None,
            projection: Projection::default(),
            answer: None,
        }
    }

    pub fn algorithm(&self) -> &A {
        &self.algorithm
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Completed
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Set the speed factor (clamped to 1..=100). The interval is
    /// captured when a run starts, so this takes effect on the next
    /// `start`.
    pub fn set_speed(&mut self, speed: u32) {
        self.speed = clamp_speed(speed);
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn answer(&self) -> Option<&Answer> {
        self.answer.as_ref()
    }

    pub fn step_index(&self) -> usize {
        self.cursor
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    /// The most recently replayed step, if any.
    pub fn current_step(&self) -> Option<&Step> {
        self.cursor.checked_sub(1).and_then(|i| self.steps.get(i))
    }

    /// Start or resume playback.
    ///
    /// From `Paused` this resumes without resetting progress. From any
    /// other phase it cancels whatever ticker may still exist, runs
    /// the producer to completion, resets counters, and enters
    /// `Running`.
    pub fn start(&mut self) {
        match self.phase {
            Phase::Paused => self.phase = Phase::Running,
            Phase::Running => {}
            Phase::Idle | Phase::Completed => self.begin_run(),
        }
    }

    /// Pause playback; consulted on each tick, the timer keeps firing.
    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
        }
    }

    /// Cancel the ticker and discard all run state.
    pub fn reset(&mut self) {
        self.ticker = None;
        self.steps.clear();
        self.cursor = 0;
        self.started_at = None;
        self.projection = Projection::default();
        self.answer = None;
        self.phase = Phase::Idle;
    }

    /// Consume a due tick, if any. Advances exactly one step while
    /// running; a due tick while paused is skipped, not rescheduled.
    pub fn poll(&mut self) {
        if !matches!(self.phase, Phase::Running | Phase::Paused) {
            return;
        }
        let now = self.clock.now();
        let Some(ticker) = self.ticker.as_mut() else {
            return;
        };
        if !ticker.due(now) {
            return;
        }
        ticker.rearm(now);
        if self.phase == Phase::Running {
            self.advance(now);
        }
    }

    /// Drive playback to completion on the owned clock, sleeping
    /// between due ticks. Intended for demos and headless runs.
    pub fn run_to_completion(&mut self) -> Option<&Answer> {
        while self.phase == Phase::Running {
            self.poll();
            if let Some(ticker) = self.ticker {
                let now = self.clock.now();
                let wait = ticker.deadline.saturating_duration_since(now);
                if !wait.is_zero() {
                    std::thread::sleep(wait);
                }
            }
        }
        self.answer()
    }

    fn begin_run(&mut self) {
        // Stale ticker from a completed or restarted run dies here.
        self.ticker = None;

        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("playback_start", algorithm = self.algorithm.name());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        self.steps = self.algorithm.produce();
        self.cursor = 0;
        self.answer = None;
        self.projection = Projection {
            current_array: self.algorithm.display_array(),
            ..Projection::default()
        };

        let now = self.clock.now();
        self.started_at = Some(now);
        self.ticker = Some(Ticker::new(tick_interval(self.speed), now));
        self.phase = Phase::Running;

        #[cfg(feature = "tracing")]
        tracing::debug!(total_steps = self.steps.len(), "sequence produced");
    }

    fn advance(&mut self, now: Instant) {
        if self.cursor < self.steps.len() {
            self.apply_step(now);
            self.cursor += 1;
        } else {
            self.complete(now);
        }
    }

    fn apply_step(&mut self, now: Instant) {
        let step = &self.steps[self.cursor];
        let p = &mut self.projection;

        p.progress = progress_percent(self.cursor, self.steps.len());
        p.comparisons += u64::from(step.comparison);
        p.swaps += u64::from(step.swap);
        if let Some(array) = &step.array {
            p.current_array = array.clone();
        } else {
            p.current_array = self.algorithm.display_array();
        }
        p.current_indices = if !step.indices.is_empty() {
            step.indices.clone()
        } else {
            step.current
                .filter(|&c| c >= 0)
                .map(|c| vec![c as usize])
                .unwrap_or_default()
        };
        p.dp = step.dp.clone();
        p.current = step.current;
        p.current_col = step.current_col;
        if let Some(start) = self.started_at {
            p.time_elapsed = now.saturating_duration_since(start);
        }
    }

    fn complete(&mut self, now: Instant) {
        self.projection.progress = 100;
        self.projection.completed = true;
        if let Some(start) = self.started_at {
            self.projection.time_elapsed = now.saturating_duration_since(start);
        }
        self.answer = Some(self.algorithm.extract(&self.steps));
        self.ticker = None;
        self.phase = Phase::Completed;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            algorithm = self.algorithm.name(),
            steps = self.steps.len(),
            "playback completed"
        );
    }
}
