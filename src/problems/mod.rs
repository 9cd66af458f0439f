//! Step-producer implementations, one module per algorithm family.
//!
//! Each module implements [`Algorithm`](crate::traits::Algorithm) for
//! its problem structs:
//! - [`dp`]     : Fibonacci, 0/1 knapsack, LCS, LIS.
//! - [`graph`]  : BFS, DFS, unit-weight Dijkstra, Prim, Kruskal.
//! - [`greedy`] : activity selection, Huffman, coin change,
//!   fractional knapsack.
//! - [`math`]   : GCD, sieve, factorization, matrix product, fast
//!   exponentiation.

pub mod dp;
pub mod graph;
pub mod greedy;
pub mod math;
