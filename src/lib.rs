//! Stepwise algorithm execution with timed playback (algoviz)
//!
//! This crate is the core of an educational algorithm visualizer: it
//! runs classic algorithms to completion while recording an ordered
//! sequence of state snapshots, then replays those snapshots at a
//! controllable rate and derives the final answer from the last
//! recorded state.
//!
//! ## Core idea
//! 1. Model your algorithm as an [`Algorithm`]: a fixed problem
//!    instance that can `produce` its full step sequence and
//!    `extract` a final answer from it.
//! 2. Hand the instance to a [`Player`], which paces replay on a
//!    single cancellable ticker and exposes pause/resume/reset as
//!    state-machine transitions.
//! 3. Render the player's live [`Projection`](player::Projection);
//!    read the [`Answer`] once playback completes.
//!
//! Producers are pure and synchronous; every step owns deep copies of
//! its snapshot data, so replay order is decoupled from computation
//! order.
//!
//! ## Quick start
//! ```
//! use algoviz::{problems::dp::Fibonacci, Algorithm, Answer};
//!
//! let algo = Fibonacci::new(10);
//! let steps = algo.produce();
//! assert_eq!(steps.len(), 9);
//! assert_eq!(algo.extract(&steps), Answer::Value(55));
//! ```
//!
//! ## Built-in algorithms
//! The `problems` module covers four families:
//! - dynamic programming: Fibonacci, 0/1 knapsack, LCS, LIS
//! - graph: BFS, DFS, unit-weight Dijkstra, Prim, Kruskal
//! - greedy: activity selection, Huffman, coin change, fractional
//!   knapsack
//! - math: GCD, sieve of Eratosthenes, prime factorization, matrix
//!   multiplication, fast exponentiation
//!
//! Free-text inputs parse into instances via the [`parse`] module.

pub mod answer;
pub mod builder;
pub mod parse;
pub mod player;
pub mod problems;
pub mod step;
pub mod traits;
pub mod utils;

pub use crate::answer::Answer;
pub use crate::builder::PlayerBuilder;
pub use crate::player::{Phase, Player, Projection};
pub use crate::step::{Family, Step};
pub use crate::traits::Algorithm;
