use std::collections::BinaryHeap;

use crate::algorithms::search::{Frontier, SearchStrategy};
use crate::model::heuristic::HaversineHeuristic;

/// Cost-ordered search guided by the great-circle estimate, f = g + h.
/// Edge weights are great-circle distances themselves, so the estimate
/// never overshoots and the first pop of the destination is optimal,
/// exactly as with plain cost ordering but with fewer expansions.
pub struct AStar<'a> {
    heuristic: &'a HaversineHeuristic,
}

impl<'a> AStar<'a> {
    pub fn new(heuristic: &'a HaversineHeuristic) -> AStar<'a> {
        AStar { heuristic }
    }
}

impl SearchStrategy for AStar<'_> {
    fn name(&self) -> &'static str {
        "a_star"
    }

    fn empty_frontier(&self) -> Frontier {
        Frontier::MinHeap(BinaryHeap::new())
    }

    fn priority(&self, g: f64, node: &str, destination: &str) -> f64 {
        g + self.heuristic.estimate(node, destination)
    }

    fn cost_at_pop(&self) -> bool {
        true
    }
}
