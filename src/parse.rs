//! Free-text input parsing into problem instances.
//!
//! One function per algorithm input format, mirroring the forms a
//! visualizer's text fields use:
//!
//! - fibonacci / sieve / factorization: `"10"`
//! - knapsack: `"2 3 4, 3 4 5, 10"` (weights, values, capacity)
//! - lcs: `"ABCDGH, AEDFHR"`
//! - lis: `"10 22 9 33 21 50 41 60"`
//! - graph: `"6\n1,2;0,2,3;..."` (vertex count, adjacency rows)
//! - activities: `"1,3;2,5;4,7"` (start,end pairs)
//! - huffman: `"a:5,b:9,c:12"`
//! - coin change: `"25 10 5 1 | 63"`
//! - fractional knapsack: `"10 20 30 | 60 100 120 | 50"`
//! - gcd / fast exponentiation: `"48, 18"`
//! - matrices: `"1 2; 3 4 | 5 6; 7 8"`
//!
//! Malformed text is rejected with a structured [`ParseError`] instead
//! of silently coercing to zeros, so every parsed instance is
//! structurally valid by construction.

use crate::problems::dp::{Fibonacci, Knapsack, Lcs, Lis};
use crate::problems::graph::Graph;
use crate::problems::greedy::{
    Activity, ActivitySelection, CoinChange, FractionalKnapsack, HuffmanCoding,
};
use crate::problems::math::{
    FastExponentiation, Gcd, MatrixMultiplication, PrimeFactorization, Sieve,
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error("invalid number `{token}`")]
    Number { token: String },
    #[error("expected {expected} field(s) separated by `{separator}`, found {found}")]
    Fields {
        expected: usize,
        separator: char,
        found: usize,
    },
    #[error("vertex {vertex} out of range for {vertices} vertices")]
    Vertex { vertex: usize, vertices: usize },
    #[error("{0}")]
    Invalid(String),
}

fn int(token: &str) -> Result<i64, ParseError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ParseError::Empty);
    }
    token.parse().map_err(|_| ParseError::Number {
        token: token.to_string(),
    })
}

fn unsigned(token: &str) -> Result<usize, ParseError> {
    let value = int(token)?;
    usize::try_from(value).map_err(|_| ParseError::Number {
        token: token.trim().to_string(),
    })
}

fn int_list(text: &str) -> Result<Vec<i64>, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::Empty);
    }
    text.split_whitespace().map(int).collect()
}

fn fields(text: &str, separator: char, expected: usize) -> Result<Vec<&str>, ParseError> {
    let parts: Vec<&str> = text.split(separator).map(str::trim).collect();
    if parts.len() != expected {
        return Err(ParseError::Fields {
            expected,
            separator,
            found: parts.len(),
        });
    }
    Ok(parts)
}

pub fn fibonacci(input: &str) -> Result<Fibonacci, ParseError> {
    Ok(Fibonacci::new(unsigned(input)?))
}

/// `"2 3 4, 3 4 5, 10"`; an optional fourth field overrides the
/// target capacity the answer is read from.
pub fn knapsack(input: &str) -> Result<Knapsack, ParseError> {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(ParseError::Fields {
            expected: 3,
            separator: ',',
            found: parts.len(),
        });
    }
    let weights = int_list(parts[0])?;
    let values = int_list(parts[1])?;
    if weights.len() != values.len() {
        return Err(ParseError::Invalid(format!(
            "{} weights but {} values",
            weights.len(),
            values.len()
        )));
    }
    if let Some(w) = weights.iter().find(|&&w| w < 0) {
        return Err(ParseError::Invalid(format!("negative weight {w}")));
    }
    let capacity = unsigned(parts[2])?;
    let mut instance = Knapsack::new(weights, values, capacity);
    if let Some(target) = parts.get(3) {
        instance = instance.with_target(unsigned(target)?);
    }
    Ok(instance)
}

pub fn lcs(input: &str) -> Result<Lcs, ParseError> {
    let parts = fields(input, ',', 2)?;
    Ok(Lcs::new(parts[0], parts[1]))
}

pub fn lis(input: &str) -> Result<Lis, ParseError> {
    Ok(Lis::new(int_list(input)?))
}

/// First line: vertex count. Second line: `;`-separated adjacency
/// rows, each a comma-separated neighbor list (empty row = isolated
/// vertex). Neighbor ids are range-checked here so traversal never
/// sees a dangling vertex.
pub fn graph(input: &str) -> Result<Graph, ParseError> {
    let mut lines = input.trim().lines();
    let vertices = unsigned(lines.next().ok_or(ParseError::Empty)?)?;
    let rows_text = lines.next().unwrap_or("").trim();

    let mut adjacency: Vec<Vec<usize>> = Vec::with_capacity(vertices);
    if !rows_text.is_empty() {
        for row in rows_text.split(';') {
            let row = row.trim();
            let mut neighbors = Vec::new();
            if !row.is_empty() {
                for token in row.split(',') {
                    let vertex = unsigned(token)?;
                    if vertex >= vertices {
                        return Err(ParseError::Vertex { vertex, vertices });
                    }
                    neighbors.push(vertex);
                }
            }
            adjacency.push(neighbors);
        }
    }
    if adjacency.len() != vertices {
        return Err(ParseError::Invalid(format!(
            "{} adjacency rows for {} vertices",
            adjacency.len(),
            vertices
        )));
    }
    Ok(Graph::new(vertices, adjacency))
}

/// `"1,3;2,5;4,7"`; original indices follow input order.
pub fn activities(input: &str) -> Result<ActivitySelection, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::Empty);
    }
    let mut activities = Vec::new();
    for (index, pair) in input.split(';').enumerate() {
        let parts = fields(pair, ',', 2)?;
        activities.push(Activity {
            start: int(parts[0])?,
            end: int(parts[1])?,
            index,
        });
    }
    Ok(ActivitySelection::new(activities))
}

/// `"a:5,b:9,c:12"`.
pub fn huffman(input: &str) -> Result<HuffmanCoding, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::Empty);
    }
    let mut symbols = Vec::new();
    for pair in input.split(',') {
        let parts = fields(pair, ':', 2)?;
        let mut chars = parts[0].chars();
        let symbol = chars.next().ok_or(ParseError::Empty)?;
        if chars.next().is_some() {
            return Err(ParseError::Invalid(format!(
                "symbol `{}` is not a single character",
                parts[0]
            )));
        }
        symbols.push((symbol, int(parts[1])?));
    }
    Ok(HuffmanCoding::new(symbols))
}

/// `"25 10 5 1 | 63"`. Denominations must be positive so the greedy
/// take loop always terminates.
pub fn coin_change(input: &str) -> Result<CoinChange, ParseError> {
    let parts = fields(input, '|', 2)?;
    let coins = int_list(parts[0])?;
    if let Some(c) = coins.iter().find(|&&c| c <= 0) {
        return Err(ParseError::Invalid(format!("non-positive coin {c}")));
    }
    Ok(CoinChange::new(coins, int(parts[1])?))
}

/// `"10 20 30 | 60 100 120 | 50"`. Weights must be positive for the
/// ratio ordering to be meaningful.
pub fn fractional_knapsack(input: &str) -> Result<FractionalKnapsack, ParseError> {
    let parts = fields(input, '|', 3)?;
    let weights = int_list(parts[0])?;
    let values = int_list(parts[1])?;
    if weights.len() != values.len() {
        return Err(ParseError::Invalid(format!(
            "{} weights but {} values",
            weights.len(),
            values.len()
        )));
    }
    if let Some(w) = weights.iter().find(|&&w| w <= 0) {
        return Err(ParseError::Invalid(format!("non-positive weight {w}")));
    }
    Ok(FractionalKnapsack::new(weights, values, int(parts[2])?))
}

pub fn gcd(input: &str) -> Result<Gcd, ParseError> {
    let parts = fields(input, ',', 2)?;
    Ok(Gcd::new(int(parts[0])?, int(parts[1])?))
}

pub fn sieve(input: &str) -> Result<Sieve, ParseError> {
    Ok(Sieve::new(unsigned(input)?))
}

pub fn prime_factorization(input: &str) -> Result<PrimeFactorization, ParseError> {
    Ok(PrimeFactorization::new(int(input)?))
}

/// `"1 2; 3 4 | 5 6; 7 8"`; row lengths must be rectangular and the
/// inner dimensions must agree.
pub fn matrices(input: &str) -> Result<MatrixMultiplication, ParseError> {
    let parts = fields(input, '|', 2)?;
    let a = matrix(parts[0])?;
    let b = matrix(parts[1])?;
    if a[0].len() != b.len() {
        return Err(ParseError::Invalid(format!(
            "inner dimensions disagree: {}x{} times {}x{}",
            a.len(),
            a[0].len(),
            b.len(),
            b[0].len()
        )));
    }
    Ok(MatrixMultiplication::new(a, b))
}

fn matrix(text: &str) -> Result<Vec<Vec<i64>>, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::Empty);
    }
    let rows: Vec<Vec<i64>> = text
        .split(';')
        .map(int_list)
        .collect::<Result<_, _>>()?;
    let width = rows[0].len();
    if rows.iter().any(|r| r.len() != width) {
        return Err(ParseError::Invalid("ragged matrix rows".to_string()));
    }
    Ok(rows)
}

pub fn fast_exponentiation(input: &str) -> Result<FastExponentiation, ParseError> {
    let parts = fields(input, ',', 2)?;
    Ok(FastExponentiation::new(int(parts[0])?, int(parts[1])?))
}
