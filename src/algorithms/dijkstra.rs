use std::collections::BinaryHeap;

use crate::algorithms::search::{Frontier, SearchStrategy};

/// Cost-ordered search. With non-negative weights the destination's cost
/// is minimal the first time it leaves the frontier.
pub struct Dijkstra;

impl SearchStrategy for Dijkstra {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn empty_frontier(&self) -> Frontier {
        Frontier::MinHeap(BinaryHeap::new())
    }

    fn priority(&self, g: f64, _node: &str, _destination: &str) -> f64 {
        g
    }

    fn cost_at_pop(&self) -> bool {
        true
    }
}
