//! Number-theoretic and matrix step producers: Euclidean GCD, sieve
//! of Eratosthenes, prime factorization, matrix multiplication, fast
//! exponentiation.

use crate::answer::Answer;
use crate::step::{Family, Step};
use crate::traits::Algorithm;

/// Euclidean GCD; one step per remainder computation. The terminal
/// step always has `current == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gcd {
    pub a: i64,
    pub b: i64,
}

impl Gcd {
    pub fn new(a: i64, b: i64) -> Self {
        Self { a, b }
    }
}

impl Algorithm for Gcd {
    fn name(&self) -> &'static str {
        "gcd"
    }

    fn family(&self) -> Family {
        Family::Math
    }

    fn produce(&self) -> Vec<Step> {
        let mut x = self.a;
        let mut y = self.b;
        let mut steps = vec![Step::scalar(x, y)];

        while y != 0 {
            // checked_rem covers both y == 0 and i64::MIN % -1.
            let rem = x.checked_rem(y).unwrap_or(0);
            x = y;
            y = rem;
            steps.push(Step::scalar(x, y));
        }
        steps
    }

    fn extract(&self, steps: &[Step]) -> Answer {
        steps
            .last()
            .and_then(|s| s.result)
            .map_or(Answer::NotFound, Answer::Value)
    }

    fn display_array(&self) -> Vec<i64> {
        vec![self.a, self.b]
    }
}

/// Sieve of Eratosthenes up to `limit`; one step per prime base after
/// its multiples are marked.
///
/// The recorded `array` maps index to itself when still prime and 0
/// otherwise. Index 0 is therefore ambiguous in the raw snapshot; the
/// answer is derived from the boolean sieve, so the ambiguity never
/// reaches extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sieve {
    pub limit: usize,
}

impl Sieve {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    fn run(&self) -> (Vec<bool>, Vec<Step>) {
        let len = (self.limit + 1).max(2);
        let mut is_prime = vec![true; len];
        is_prime[0] = false;
        is_prime[1] = false;

        let mut steps = vec![Step::sweep(&sentinel_array(&is_prime), 2)];
        let mut i = 2usize;
        while i * i <= self.limit {
            if is_prime[i] {
                let mut j = i * i;
                while j <= self.limit {
                    is_prime[j] = false;
                    j += i;
                }
                steps.push(Step::sweep(&sentinel_array(&is_prime), i as i64));
            }
            i += 1;
        }
        (is_prime, steps)
    }
}

fn sentinel_array(is_prime: &[bool]) -> Vec<i64> {
    is_prime
        .iter()
        .enumerate()
        .map(|(i, &p)| if p { i as i64 } else { 0 })
        .collect()
}

impl Algorithm for Sieve {
    fn name(&self) -> &'static str {
        "sieve_of_eratosthenes"
    }

    fn family(&self) -> Family {
        Family::Math
    }

    fn produce(&self) -> Vec<Step> {
        self.run().1
    }

    fn extract(&self, _steps: &[Step]) -> Answer {
        let (is_prime, _) = self.run();
        let primes: Vec<i64> = is_prime
            .iter()
            .enumerate()
            .filter(|&(_, &p)| p)
            .map(|(i, _)| i as i64)
            .collect();
        if primes.is_empty() {
            Answer::NotFound
        } else {
            Answer::Sequence(primes)
        }
    }

    fn display_array(&self) -> Vec<i64> {
        (0..=self.limit as i64).collect()
    }
}

/// Trial-division prime factorization; one step per extracted factor,
/// plus a trailing step when a factor above the trial bound remains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeFactorization {
    pub n: i64,
}

impl PrimeFactorization {
    pub fn new(n: i64) -> Self {
        Self { n }
    }
}

impl Algorithm for PrimeFactorization {
    fn name(&self) -> &'static str {
        "prime_factorization"
    }

    fn family(&self) -> Family {
        Family::Math
    }

    fn produce(&self) -> Vec<Step> {
        let mut num = self.n;
        let mut factors: Vec<i64> = Vec::new();
        let mut steps = vec![Step::trail(num, &factors)];

        let mut i = 2i64;
        while i.saturating_mul(i) <= num {
            while num % i == 0 {
                factors.push(i);
                num /= i;
                steps.push(Step::trail(num, &factors));
            }
            i += 1;
        }
        if num > 1 {
            factors.push(num);
            steps.push(Step::trail(1, &factors));
        }
        steps
    }

    fn extract(&self, steps: &[Step]) -> Answer {
        let factors = steps.last().and_then(|s| s.path.as_ref());
        match factors {
            Some(f) if !f.is_empty() => Answer::Sequence(f.clone()),
            _ => Answer::NotFound,
        }
    }

    fn display_array(&self) -> Vec<i64> {
        vec![self.n]
    }
}

/// Naive matrix product; one step per completed output row. The
/// evolving result is recorded as a table snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixMultiplication {
    pub a: Vec<Vec<i64>>,
    pub b: Vec<Vec<i64>>,
}

impl MatrixMultiplication {
    pub fn new(a: Vec<Vec<i64>>, b: Vec<Vec<i64>>) -> Self {
        Self { a, b }
    }

    fn shape_ok(&self) -> bool {
        let inner = self.b.len();
        !self.a.is_empty()
            && !self.b.is_empty()
            && !self.b[0].is_empty()
            && self.a.iter().all(|row| row.len() == inner)
            && self.b.iter().all(|row| row.len() == self.b[0].len())
    }
}

impl Algorithm for MatrixMultiplication {
    fn name(&self) -> &'static str {
        "matrix_multiplication"
    }

    fn family(&self) -> Family {
        Family::Math
    }

    fn produce(&self) -> Vec<Step> {
        if !self.shape_ok() {
            return Vec::new();
        }
        let m = self.a.len();
        let n = self.b[0].len();
        let p = self.b.len();
        let mut result = vec![vec![0i64; n]; m];

        let mut steps = vec![Step::table(&result, 0)];
        for i in 0..m {
            for j in 0..n {
                for k in 0..p {
                    result[i][j] += self.a[i][k] * self.b[k][j];
                }
            }
            steps.push(Step::table(&result, i as i64));
        }
        steps
    }

    fn extract(&self, steps: &[Step]) -> Answer {
        steps
            .last()
            .and_then(|s| s.dp.as_ref())
            .map_or(Answer::NotFound, |dp| Answer::Matrix(dp.clone()))
    }
}

/// Square-and-multiply exponentiation; one step per halving of the
/// exponent. Products saturate instead of wrapping so large inputs
/// stay panic-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FastExponentiation {
    pub base: i64,
    pub exponent: i64,
}

impl FastExponentiation {
    pub fn new(base: i64, exponent: i64) -> Self {
        Self { base, exponent }
    }
}

impl Algorithm for FastExponentiation {
    fn name(&self) -> &'static str {
        "fast_exponentiation"
    }

    fn family(&self) -> Family {
        Family::Math
    }

    fn produce(&self) -> Vec<Step> {
        let mut result = 1i64;
        let mut base = self.base;
        let mut exponent = self.exponent;
        let mut steps = vec![Step::scalar(result, exponent)];

        while exponent > 0 {
            if exponent % 2 == 1 {
                result = result.saturating_mul(base);
            }
            base = base.saturating_mul(base);
            exponent /= 2;
            steps.push(Step::scalar(result, exponent));
        }
        steps
    }

    fn extract(&self, steps: &[Step]) -> Answer {
        steps
            .last()
            .and_then(|s| s.result)
            .map_or(Answer::NotFound, Answer::Value)
    }

    fn display_array(&self) -> Vec<i64> {
        vec![self.base, self.exponent]
    }
}
