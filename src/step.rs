//! Step snapshot records produced by the algorithm runners.
//!
//! Each `Step` is an immutable snapshot of algorithm progress at one
//! point in execution. The record is a superset of the per-family
//! fields; a producer populates only what its domain needs.
//!
//! Every constructor takes borrowed data and clones it into the step,
//! so a recorded snapshot can never alias a working buffer that a
//! later iteration mutates. Playback replays steps long after the
//! producer finished, and a renderer may hold an old step while newer
//! ones are displayed.

/// Algorithm family tag; renderers dispatch their drawing mode on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Dp,
    Graph,
    Greedy,
    Math,
}

impl Family {
    pub fn as_str(self) -> &'static str {
        match self {
            Family::Dp => "dp",
            Family::Graph => "graph",
            Family::Greedy => "greedy",
            Family::Math => "math",
        }
    }
}

/// One recorded snapshot of algorithm state.
///
/// Only the fields relevant to the producing algorithm are populated;
/// the rest stay at their defaults. All containers are owned deep
/// copies taken at record time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Step {
    /// 1-D working array at this point (bars, sieve marks, dp row).
    pub array: Option<Vec<i64>>,
    /// Positions currently being compared or touched.
    pub indices: Vec<usize>,
    /// Marks this step as a comparison event (drives the counter).
    pub comparison: bool,
    /// Marks this step as a swap event (drives the counter).
    pub swap: bool,
    /// Full 2-D table snapshot.
    pub dp: Option<Vec<Vec<i64>>>,
    /// Highlighted row / vertex / generic value at this step.
    pub current: Option<i64>,
    /// Highlighted column, when a single cell is meaningful.
    pub current_col: Option<i64>,
    /// Per-vertex visited flags (graph traversal).
    pub visited: Option<Vec<bool>>,
    /// Accumulated path / edge sequence so far.
    pub path: Option<Vec<i64>>,
    /// Chosen item indices or values so far (greedy family).
    pub selected: Option<Vec<i64>>,
    /// Scalar accumulator (math family).
    pub result: Option<i64>,
}

impl Step {
    /// Snapshot of a full 2-D table with a highlighted row.
    pub fn table(dp: &[Vec<i64>], current: i64) -> Self {
        Step {
            dp: Some(dp.to_vec()),
            current: Some(current),
            ..Step::default()
        }
    }

    /// Snapshot of a 1-D dp array, stored as a single-row table.
    pub fn row(dp: &[i64], current: i64) -> Self {
        Step {
            dp: Some(vec![dp.to_vec()]),
            current: Some(current),
            ..Step::default()
        }
    }

    /// Graph discovery snapshot: visited flags, the vertex being
    /// visited, and the path accumulated so far.
    pub fn visit(visited: &[bool], current: i64, path: &[i64]) -> Self {
        Step {
            visited: Some(visited.to_vec()),
            current: Some(current),
            path: Some(path.to_vec()),
            ..Step::default()
        }
    }

    /// Greedy pick snapshot: selections so far plus a cursor.
    pub fn selection(selected: &[i64], current: i64) -> Self {
        Step {
            selected: Some(selected.to_vec()),
            current: Some(current),
            ..Step::default()
        }
    }

    /// Scalar accumulator snapshot (GCD remainders, running powers).
    pub fn scalar(result: i64, current: i64) -> Self {
        Step {
            result: Some(result),
            current: Some(current),
            ..Step::default()
        }
    }

    /// Scalar accumulator plus an accumulated value trail
    /// (prime factorization).
    pub fn trail(result: i64, path: &[i64]) -> Self {
        Step {
            result: Some(result),
            path: Some(path.to_vec()),
            ..Step::default()
        }
    }

    /// 1-D array sweep snapshot (sieve marks).
    pub fn sweep(array: &[i64], current: i64) -> Self {
        Step {
            array: Some(array.to_vec()),
            current: Some(current),
            ..Step::default()
        }
    }

    /// Attach a 1-D array copy to an existing step.
    pub fn with_array(mut self, array: &[i64]) -> Self {
        self.array = Some(array.to_vec());
        self
    }

    /// Attach a path copy to an existing step.
    pub fn with_path(mut self, path: &[i64]) -> Self {
        self.path = Some(path.to_vec());
        self
    }
}
