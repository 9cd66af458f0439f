use algoviz::problems::dp::{Fibonacci, Knapsack, Lcs, Lis};
use algoviz::problems::greedy::CoinChange;
use algoviz::problems::math::{Gcd, PrimeFactorization, Sieve};
use algoviz::{Algorithm, Answer};
use proptest::prelude::*;

fn brute_force_knapsack(weights: &[i64], values: &[i64], capacity: i64) -> i64 {
    let n = weights.len();
    let mut best = 0i64;
    for mask in 0u32..(1 << n) {
        let (mut w, mut v) = (0i64, 0i64);
        for i in 0..n {
            if mask & (1 << i) != 0 {
                w += weights[i];
                v += values[i];
            }
        }
        if w <= capacity {
            best = best.max(v);
        }
    }
    best
}

fn euclid(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

proptest! {
    #[test]
    fn fibonacci_length_law(n in 0usize..60) {
        let steps = Fibonacci::new(n).produce();
        prop_assert_eq!(steps.len(), n.saturating_sub(1).max(1));
    }

    #[test]
    fn fibonacci_idempotent(n in 0usize..40) {
        prop_assert_eq!(Fibonacci::new(n).produce(), Fibonacci::new(n).produce());
    }

    #[test]
    fn knapsack_optimum_matches_brute_force(
        items in prop::collection::vec((1i64..12, 1i64..30), 0..10),
        capacity in 0usize..40,
    ) {
        let weights: Vec<i64> = items.iter().map(|&(w, _)| w).collect();
        let values: Vec<i64> = items.iter().map(|&(_, v)| v).collect();
        let algo = Knapsack::new(weights.clone(), values.clone(), capacity);
        let steps = algo.produce();
        let expected = brute_force_knapsack(&weights, &values, capacity as i64);
        match algo.extract(&steps) {
            Answer::Items { value, indices } => {
                prop_assert_eq!(value, expected);
                let w: i64 = indices.iter().map(|&i| weights[i]).sum();
                let v: i64 = indices.iter().map(|&i| values[i]).sum();
                prop_assert!(w <= capacity as i64);
                prop_assert_eq!(v, value);
            }
            other => prop_assert!(false, "unexpected answer {:?}", other),
        }
    }

    #[test]
    fn knapsack_idempotent(
        items in prop::collection::vec((1i64..10, 1i64..20), 0..8),
        capacity in 0usize..30,
    ) {
        let weights: Vec<i64> = items.iter().map(|&(w, _)| w).collect();
        let values: Vec<i64> = items.iter().map(|&(_, v)| v).collect();
        let algo = Knapsack::new(weights, values, capacity);
        prop_assert_eq!(algo.produce(), algo.produce());
    }

    #[test]
    fn lcs_is_symmetric_in_length(a in "[A-D]{0,12}", b in "[A-D]{0,12}") {
        let forward = Lcs::new(&a, &b);
        let backward = Lcs::new(&b, &a);
        let fv = forward.extract(&forward.produce());
        let bv = backward.extract(&backward.produce());
        prop_assert_eq!(fv, bv);
    }

    #[test]
    fn lcs_bounded_by_shorter_input(a in "[A-D]{1,12}", b in "[A-D]{1,12}") {
        let algo = Lcs::new(&a, &b);
        match algo.extract(&algo.produce()) {
            Answer::Value(v) => {
                prop_assert!(v as usize <= a.chars().count().min(b.chars().count()));
            }
            other => prop_assert!(false, "unexpected answer {:?}", other),
        }
    }

    #[test]
    fn lis_bounds(values in prop::collection::vec(-50i64..50, 1..20)) {
        let algo = Lis::new(values.clone());
        let steps = algo.produce();
        match algo.extract(&steps) {
            Answer::Value(len) => {
                prop_assert!(len >= 1);
                prop_assert!(len as usize <= values.len());
            }
            other => prop_assert!(false, "unexpected answer {:?}", other),
        }
    }

    #[test]
    fn gcd_matches_euclid(a in 1i64..10_000, b in 0i64..10_000) {
        let algo = Gcd::new(a, b);
        let steps = algo.produce();
        prop_assert_eq!(algo.extract(&steps), Answer::Value(euclid(a, b)));
        prop_assert_eq!(steps.last().unwrap().current, Some(0));
    }

    #[test]
    fn factorization_product_law(n in 2i64..100_000) {
        let algo = PrimeFactorization::new(n);
        let steps = algo.produce();
        match algo.extract(&steps) {
            Answer::Sequence(factors) => {
                prop_assert_eq!(factors.iter().product::<i64>(), n);
            }
            other => prop_assert!(false, "unexpected answer {:?}", other),
        }
    }

    #[test]
    fn sieve_marks_agree_with_trial_division(limit in 0usize..300) {
        let algo = Sieve::new(limit);
        let steps = algo.produce();
        let last = steps.last().unwrap().array.as_ref().unwrap().clone();
        for (i, &mark) in last.iter().enumerate().take(limit + 1) {
            let is_prime = i >= 2 && (2..i).take_while(|d| d * d <= i).all(|d| i % d != 0);
            if is_prime {
                prop_assert_eq!(mark, i as i64, "prime {} unmarked", i);
            } else {
                prop_assert_eq!(mark, 0, "composite {} marked", i);
            }
        }
    }

    #[test]
    fn coin_change_pays_out_at_most_the_amount(
        coins in prop::collection::vec(1i64..50, 1..6),
        amount in 0i64..200,
    ) {
        let algo = CoinChange::new(coins, amount);
        let steps = algo.produce();
        if let Some(step) = steps.last() {
            let paid: i64 = step.selected.as_ref().unwrap().iter().sum();
            prop_assert!(paid <= amount);
        }
    }
}
