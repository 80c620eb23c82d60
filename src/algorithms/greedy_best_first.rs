use crate::algorithms::search::{Frontier, SearchStrategy};
use crate::model::heuristic::HaversineHeuristic;

/// Orders the frontier by the straight-line estimate to the destination
/// alone, ignoring the cost already paid. Fast, no optimality guarantee;
/// the reported cost is summed over the route it actually returned.
pub struct GreedyBestFirst<'a> {
    heuristic: &'a HaversineHeuristic,
}

impl<'a> GreedyBestFirst<'a> {
    pub fn new(heuristic: &'a HaversineHeuristic) -> GreedyBestFirst<'a> {
        GreedyBestFirst { heuristic }
    }
}

impl SearchStrategy for GreedyBestFirst<'_> {
    fn name(&self) -> &'static str {
        "greedy_best_first"
    }

    fn empty_frontier(&self) -> Frontier {
        Frontier::MinHeap(std::collections::BinaryHeap::new())
    }

    fn priority(&self, _g: f64, node: &str, destination: &str) -> f64 {
        self.heuristic.estimate(node, destination)
    }

    fn cost_at_pop(&self) -> bool {
        false
    }
}
