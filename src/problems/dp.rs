//! Dynamic-programming step producers: Fibonacci, 0/1 knapsack,
//! longest common subsequence, longest increasing subsequence.
//!
//! All four record full table snapshots. Row-based tables emit one
//! step per completed row rather than per cell, bounding the sequence
//! length to O(n) so playback pacing stays uniform across inputs.

use crate::answer::Answer;
use crate::step::{Family, Step};
use crate::traits::Algorithm;

/// Tabulated Fibonacci over `dp[0..=n]`.
///
/// One step per `dp[i]` fill for `i` in `2..=n`; the table is
/// pre-seeded with `dp[0] = 0`, `dp[1] = 1`, and `n < 2` degenerates
/// to a single snapshot of the seed. The sequence length is
/// `max(n - 1, 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fibonacci {
    pub n: usize,
}

impl Fibonacci {
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

impl Algorithm for Fibonacci {
    fn name(&self) -> &'static str {
        "fibonacci"
    }

    fn family(&self) -> Family {
        Family::Dp
    }

    fn produce(&self) -> Vec<Step> {
        let len = (self.n + 1).max(2);
        let mut dp = vec![0i64; len];
        dp[1] = 1;

        if self.n < 2 {
            return vec![Step::row(&dp, 1)];
        }
        let mut steps = Vec::with_capacity(self.n - 1);
        for i in 2..=self.n {
            dp[i] = dp[i - 1] + dp[i - 2];
            steps.push(Step::row(&dp, i as i64));
        }
        steps
    }

    fn extract(&self, steps: &[Step]) -> Answer {
        steps
            .last()
            .and_then(|s| s.dp.as_ref())
            .and_then(|dp| dp.first())
            .and_then(|row| row.get(self.n))
            .map_or(Answer::NotFound, |&v| Answer::Value(v))
    }

    fn display_array(&self) -> Vec<i64> {
        (0..=self.n as i64).collect()
    }
}

/// 0/1 knapsack over an `(n+1) x (capacity+1)` value table.
///
/// One step per completed row. `target` is the capacity column the
/// answer is read from; it defaults to the full capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Knapsack {
    pub weights: Vec<i64>,
    pub values: Vec<i64>,
    pub capacity: usize,
    pub target: Option<usize>,
}

impl Knapsack {
    pub fn new(weights: Vec<i64>, values: Vec<i64>, capacity: usize) -> Self {
        Self {
            weights,
            values,
            capacity,
            target: None,
        }
    }

    pub fn with_target(mut self, target: usize) -> Self {
        self.target = Some(target);
        self
    }

    fn item_count(&self) -> usize {
        self.weights.len().min(self.values.len())
    }
}

impl Algorithm for Knapsack {
    fn name(&self) -> &'static str {
        "knapsack"
    }

    fn family(&self) -> Family {
        Family::Dp
    }

    fn produce(&self) -> Vec<Step> {
        let n = self.item_count();
        let cap = self.capacity;
        let mut dp = vec![vec![0i64; cap + 1]; n + 1];

        let mut steps = vec![Step::table(&dp, 0)];
        for i in 1..=n {
            let wi = self.weights[i - 1];
            let vi = self.values[i - 1];
            for w in 0..=cap {
                dp[i][w] = if wi >= 0 && wi <= w as i64 {
                    (vi + dp[i - 1][w - wi as usize]).max(dp[i - 1][w])
                } else {
                    dp[i - 1][w]
                };
            }
            steps.push(Step::table(&dp, i as i64));
        }
        steps
    }

    fn extract(&self, steps: &[Step]) -> Answer {
        let n = self.item_count();
        let target = self.target.unwrap_or(self.capacity).min(self.capacity);
        let Some(dp) = steps.last().and_then(|s| s.dp.as_ref()) else {
            return Answer::NotFound;
        };
        let value = dp[n][target];

        // Backtrack: a row-to-row difference means item i-1 was taken;
        // ties favor exclusion.
        let mut indices = Vec::new();
        let mut w = target;
        for i in (1..=n).rev() {
            if w == 0 {
                break;
            }
            if dp[i][w] != dp[i - 1][w] {
                indices.push(i - 1);
                w = w.saturating_sub(self.weights[i - 1].max(0) as usize);
            }
        }
        indices.reverse();
        Answer::Items { value, indices }
    }

    fn display_array(&self) -> Vec<i64> {
        self.weights.clone()
    }
}

/// Longest common subsequence of two strings over an
/// `(m+1) x (n+1)` length table, one step per completed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcs {
    a: Vec<char>,
    b: Vec<char>,
}

impl Lcs {
    pub fn new(a: &str, b: &str) -> Self {
        Self {
            a: a.chars().collect(),
            b: b.chars().collect(),
        }
    }
}

impl Algorithm for Lcs {
    fn name(&self) -> &'static str {
        "lcs"
    }

    fn family(&self) -> Family {
        Family::Dp
    }

    fn produce(&self) -> Vec<Step> {
        let m = self.a.len();
        let n = self.b.len();
        let mut dp = vec![vec![0i64; n + 1]; m + 1];

        let mut steps = vec![Step::table(&dp, 0)];
        for i in 1..=m {
            for j in 1..=n {
                dp[i][j] = if self.a[i - 1] == self.b[j - 1] {
                    dp[i - 1][j - 1] + 1
                } else {
                    dp[i - 1][j].max(dp[i][j - 1])
                };
            }
            steps.push(Step::table(&dp, i as i64));
        }
        steps
    }

    fn extract(&self, steps: &[Step]) -> Answer {
        if self.a.is_empty() || self.b.is_empty() {
            return Answer::NotFound;
        }
        steps
            .last()
            .and_then(|s| s.dp.as_ref())
            .map_or(Answer::NotFound, |dp| {
                Answer::Value(dp[self.a.len()][self.b.len()])
            })
    }

    fn display_array(&self) -> Vec<i64> {
        (0..self.a.len().max(self.b.len()) as i64).collect()
    }
}

/// Longest increasing subsequence via O(n^2) pairwise comparison over
/// a 1-D length array.
///
/// One step per outer index after its inner loop completes. The
/// recorded `path` is the append-only outer-index accumulator, not a
/// subsequence reconstruction; the answer is the max length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lis {
    pub values: Vec<i64>,
}

impl Lis {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }
}

impl Algorithm for Lis {
    fn name(&self) -> &'static str {
        "lis"
    }

    fn family(&self) -> Family {
        Family::Dp
    }

    fn produce(&self) -> Vec<Step> {
        let n = self.values.len();
        let mut dp = vec![1i64; n];
        let mut path: Vec<i64> = Vec::new();

        let mut steps = vec![Step::row(&dp, 0).with_array(&dp).with_path(&path)];
        for i in 1..n {
            for j in 0..i {
                if self.values[i] > self.values[j] {
                    dp[i] = dp[i].max(dp[j] + 1);
                }
            }
            path.push(i as i64);
            steps.push(Step::row(&dp, i as i64).with_array(&dp).with_path(&path));
        }
        steps
    }

    fn extract(&self, steps: &[Step]) -> Answer {
        if self.values.is_empty() {
            return Answer::NotFound;
        }
        steps
            .last()
            .and_then(|s| s.dp.as_ref())
            .and_then(|dp| dp.first())
            .and_then(|row| row.iter().max().copied())
            .map_or(Answer::NotFound, Answer::Value)
    }

    fn display_array(&self) -> Vec<i64> {
        self.values.clone()
    }
}
