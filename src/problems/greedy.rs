//! Greedy step producers: activity selection, Huffman tree
//! construction, coin change, fractional knapsack.
//!
//! Each producer records one step per pick. `selected` carries the
//! accumulated choices: original activity indices, the current node
//! frequency multiset, coin values taken, or item indices.

use crate::answer::Answer;
use crate::step::{Family, Step};
use crate::traits::Algorithm;

/// One schedulable activity with its original position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub start: i64,
    pub end: i64,
    pub index: usize,
}

/// Classic interval scheduling: sort by end time, take every activity
/// compatible with the last accepted one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivitySelection {
    pub activities: Vec<Activity>,
}

impl ActivitySelection {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }
}

impl Algorithm for ActivitySelection {
    fn name(&self) -> &'static str {
        "activity_selection"
    }

    fn family(&self) -> Family {
        Family::Greedy
    }

    fn produce(&self) -> Vec<Step> {
        let mut by_end = self.activities.clone();
        by_end.sort_by_key(|a| a.end);

        let mut steps = Vec::new();
        let mut selected: Vec<i64> = Vec::new();
        let mut last_end = 0;
        for (i, activity) in by_end.iter().enumerate() {
            if activity.start >= last_end {
                selected.push(activity.index as i64);
                last_end = activity.end;
                steps.push(Step::selection(&selected, i as i64));
            }
        }
        steps
    }

    fn extract(&self, steps: &[Step]) -> Answer {
        steps
            .last()
            .and_then(|s| s.selected.as_ref())
            .map_or(Answer::NotFound, |sel| Answer::Value(sel.len() as i64))
    }

    fn display_array(&self) -> Vec<i64> {
        self.activities.iter().map(|a| a.end).collect()
    }
}

/// Huffman tree construction, tracking only the evolving frequency
/// multiset. Code assignment is out of scope; the steps show the two
/// lowest frequencies merging until one root remains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanCoding {
    pub symbols: Vec<(char, i64)>,
}

impl HuffmanCoding {
    pub fn new(symbols: Vec<(char, i64)>) -> Self {
        Self { symbols }
    }
}

impl Algorithm for HuffmanCoding {
    fn name(&self) -> &'static str {
        "huffman_coding"
    }

    fn family(&self) -> Family {
        Family::Greedy
    }

    fn produce(&self) -> Vec<Step> {
        let mut nodes: Vec<i64> = self.symbols.iter().map(|&(_, f)| f).collect();
        let mut steps = vec![Step::selection(&nodes, 0)];

        while nodes.len() > 1 {
            nodes.sort_unstable();
            let left = nodes.remove(0);
            let right = nodes.remove(0);
            nodes.push(left + right);
            steps.push(Step::selection(&nodes, nodes.len() as i64));
        }
        steps
    }

    fn extract(&self, steps: &[Step]) -> Answer {
        if self.symbols.is_empty() {
            return Answer::NotFound;
        }
        steps
            .last()
            .and_then(|s| s.selected.as_ref())
            .map_or(Answer::NotFound, |sel| Answer::Sequence(sel.clone()))
    }

    fn display_array(&self) -> Vec<i64> {
        self.symbols.iter().map(|&(_, f)| f).collect()
    }
}

/// Greedy coin change: coins sorted descending, one step per coin
/// unit taken.
///
/// Greedy is minimal only for canonical coin systems; for arbitrary
/// denominations it can overshoot, which is exactly what this
/// producer is meant to demonstrate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinChange {
    pub coins: Vec<i64>,
    pub amount: i64,
}

impl CoinChange {
    pub fn new(coins: Vec<i64>, amount: i64) -> Self {
        Self { coins, amount }
    }
}

impl Algorithm for CoinChange {
    fn name(&self) -> &'static str {
        "coin_change"
    }

    fn family(&self) -> Family {
        Family::Greedy
    }

    fn produce(&self) -> Vec<Step> {
        let mut coins = self.coins.clone();
        coins.sort_unstable_by(|a, b| b.cmp(a));

        let mut steps = Vec::new();
        let mut selected: Vec<i64> = Vec::new();
        let mut remaining = self.amount;
        for (i, &coin) in coins.iter().enumerate() {
            if coin <= 0 {
                continue;
            }
            while remaining >= coin {
                selected.push(coin);
                remaining -= coin;
                steps.push(Step::selection(&selected, i as i64));
            }
        }
        steps
    }

    fn extract(&self, steps: &[Step]) -> Answer {
        steps
            .last()
            .and_then(|s| s.selected.as_ref())
            .map_or(Answer::NotFound, |sel| Answer::Value(sel.len() as i64))
    }

    fn display_array(&self) -> Vec<i64> {
        self.coins.clone()
    }
}

/// Fractional knapsack: items in descending value/weight ratio, full
/// takes until the remainder forces one fractional take.
///
/// Ratios are compared by cross multiplication, so ordering is exact
/// without floating point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FractionalKnapsack {
    pub weights: Vec<i64>,
    pub values: Vec<i64>,
    pub capacity: i64,
}

impl FractionalKnapsack {
    pub fn new(weights: Vec<i64>, values: Vec<i64>, capacity: i64) -> Self {
        Self {
            weights,
            values,
            capacity,
        }
    }
}

impl Algorithm for FractionalKnapsack {
    fn name(&self) -> &'static str {
        "fractional_knapsack"
    }

    fn family(&self) -> Family {
        Family::Greedy
    }

    fn produce(&self) -> Vec<Step> {
        let n = self.weights.len().min(self.values.len());
        let mut items: Vec<(usize, i64, i64)> = (0..n)
            .map(|i| (i, self.weights[i], self.values[i]))
            .collect();
        // Descending value/weight: a before b iff va*wb > vb*wa.
        items.sort_by(|a, b| (b.2 * a.1).cmp(&(a.2 * b.1)));

        let mut steps = Vec::new();
        let mut selected: Vec<i64> = Vec::new();
        let mut remaining = self.capacity;
        for (i, &(index, weight, _)) in items.iter().enumerate() {
            if remaining >= weight {
                selected.push(index as i64);
                remaining -= weight;
            } else {
                selected.push(index as i64);
                remaining = 0;
            }
            steps.push(Step::selection(&selected, i as i64));
            if remaining == 0 {
                break;
            }
        }
        steps
    }

    fn extract(&self, steps: &[Step]) -> Answer {
        steps
            .last()
            .and_then(|s| s.selected.as_ref())
            .map_or(Answer::NotFound, |sel| Answer::Value(sel.len() as i64))
    }

    fn display_array(&self) -> Vec<i64> {
        self.weights.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acts(pairs: &[(i64, i64)]) -> Vec<Activity> {
        pairs
            .iter()
            .enumerate()
            .map(|(index, &(start, end))| Activity { start, end, index })
            .collect()
    }

    #[test]
    fn activity_selection_takes_compatible_set() {
        let algo = ActivitySelection::new(acts(&[(1, 3), (2, 5), (3, 7), (7, 9)]));
        let steps = algo.produce();
        assert_eq!(steps.len(), 3);
        assert_eq!(
            steps.last().unwrap().selected.as_ref().unwrap(),
            &vec![0, 2, 3]
        );
        assert_eq!(algo.extract(&steps), Answer::Value(3));
    }

    #[test]
    fn activity_selection_empty_is_not_found() {
        let algo = ActivitySelection::new(vec![]);
        let steps = algo.produce();
        assert!(steps.is_empty());
        assert_eq!(algo.extract(&steps), Answer::NotFound);
    }

    #[test]
    fn huffman_merges_to_total_frequency() {
        let algo = HuffmanCoding::new(vec![('a', 5), ('b', 9), ('c', 12), ('d', 13)]);
        let steps = algo.produce();
        // One initial step plus one per merge.
        assert_eq!(steps.len(), 4);
        assert_eq!(
            steps.last().unwrap().selected.as_ref().unwrap(),
            &vec![39]
        );
        assert_eq!(algo.extract(&steps), Answer::Sequence(vec![39]));
    }

    #[test]
    fn coin_change_canonical_system() {
        let algo = CoinChange::new(vec![25, 10, 5, 1], 63);
        let steps = algo.produce();
        let taken = steps.last().unwrap().selected.as_ref().unwrap().clone();
        assert_eq!(taken, vec![25, 25, 10, 1, 1, 1]);
        assert_eq!(algo.extract(&steps), Answer::Value(6));
    }

    #[test]
    fn coin_change_greedy_overshoots_non_canonical() {
        // Optimal for 6 with {4, 3, 1} is two coins; greedy takes three.
        let algo = CoinChange::new(vec![4, 3, 1], 6);
        let steps = algo.produce();
        assert_eq!(algo.extract(&steps), Answer::Value(3));
    }

    #[test]
    fn coin_change_ignores_nonpositive_coins() {
        let algo = CoinChange::new(vec![0, -5, 2], 4);
        let steps = algo.produce();
        assert_eq!(
            steps.last().unwrap().selected.as_ref().unwrap(),
            &vec![2, 2]
        );
    }

    #[test]
    fn fractional_knapsack_classic_instance() {
        let algo = FractionalKnapsack::new(vec![10, 20, 30], vec![60, 100, 120], 50);
        let steps = algo.produce();
        // Ratio order 0, 1, 2; item 2 is the fractional take.
        assert_eq!(steps.len(), 3);
        assert_eq!(
            steps.last().unwrap().selected.as_ref().unwrap(),
            &vec![0, 1, 2]
        );
        assert_eq!(algo.extract(&steps), Answer::Value(3));
    }
}
