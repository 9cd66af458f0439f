//! Final answers derived from a completed step sequence.

use std::fmt;

/// User-facing result of a finished run.
///
/// Computed once by [`Algorithm::extract`](crate::traits::Algorithm::extract)
/// when playback reaches the end of the sequence; cleared on reset.
/// Degenerate inputs (empty strings, zero vertices, unreachable
/// targets) resolve to [`Answer::NotFound`], never to a panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// A single scalar: optimal value, sequence length, gcd, power.
    Value(i64),
    /// Optimal value plus the chosen item indices (0/1 knapsack).
    Items { value: i64, indices: Vec<usize> },
    /// Start-to-target vertex path from a graph search.
    Path(Vec<usize>),
    /// Spanning-tree edge list with its unit-weight cost.
    Mst { edges: Vec<(usize, usize)>, cost: i64 },
    /// An ordered list of values: primes, factors, node frequencies.
    Sequence(Vec<i64>),
    /// A full 2-D result (matrix multiplication).
    Matrix(Vec<Vec<i64>>),
    /// No meaningful answer exists for this input.
    NotFound,
}

impl Answer {
    pub fn is_found(&self) -> bool {
        !matches!(self, Answer::NotFound)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Value(v) => write!(f, "{v}"),
            Answer::Items { value, indices } => {
                write!(f, "{value} (items ")?;
                fmt_list(f, indices.iter())?;
                write!(f, ")")
            }
            Answer::Path(path) => fmt_join(f, path.iter(), " -> "),
            Answer::Mst { edges, cost } => {
                write!(f, "cost {cost}: ")?;
                for (i, (u, v)) in edges.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "({u},{v})")?;
                }
                Ok(())
            }
            Answer::Sequence(values) => fmt_list(f, values.iter()),
            Answer::Matrix(rows) => {
                for (i, row) in rows.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    fmt_join(f, row.iter(), " ")?;
                }
                Ok(())
            }
            Answer::NotFound => write!(f, "not found"),
        }
    }
}

fn fmt_list<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = T>,
) -> fmt::Result {
    fmt_join(f, items, ", ")
}

fn fmt_join<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = T>,
    sep: &str,
) -> fmt::Result {
    for (i, item) in items.enumerate() {
        if i > 0 {
            write!(f, "{sep}")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
