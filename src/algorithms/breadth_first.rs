use std::collections::VecDeque;

use crate::algorithms::search::{Frontier, SearchStrategy};

/// Uninformed search over a FIFO frontier. Finds the path with the fewest
/// hops, which is not necessarily the cheapest one.
pub struct BreadthFirst;

impl SearchStrategy for BreadthFirst {
    fn name(&self) -> &'static str {
        "breadth_first"
    }

    fn empty_frontier(&self) -> Frontier {
        Frontier::Fifo(VecDeque::new())
    }

    fn priority(&self, _g: f64, _node: &str, _destination: &str) -> f64 {
        0.0
    }

    fn cost_at_pop(&self) -> bool {
        false
    }
}
