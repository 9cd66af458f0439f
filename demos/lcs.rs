//! Example: LCS table fill, step by step.
//!
//! Run with:
//! `cargo run --example lcs`

use algoviz::problems::dp::Lcs;
use algoviz::Algorithm;

fn main() {
    let algo = Lcs::new("ABCDGH", "AEDFHR");
    let steps = algo.produce();

    println!("recorded {} steps", steps.len());
    for (i, step) in steps.iter().enumerate() {
        let row = step.current.unwrap_or(0);
        println!("step {i}: row {row} complete");
    }
    println!("answer: {}", algo.extract(&steps));
}
