use std::collections::{BinaryHeap, HashSet, VecDeque};

use crate::model::frontier_item::FrontierItem;
use crate::model::route_graph::RouteGraph;

/// Result of one search invocation. `cost` is NaN whenever `path` is None.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub path: Option<Vec<String>>,
    pub cost: f64,
    pub expanded: u64,
}

impl SearchOutcome {
    fn no_path(expanded: u64) -> SearchOutcome {
        SearchOutcome { path: None, cost: f64::NAN, expanded }
    }
}

pub enum Frontier {
    Fifo(VecDeque<FrontierItem>),
    Lifo(Vec<FrontierItem>),
    MinHeap(BinaryHeap<FrontierItem>),
}

impl Frontier {
    fn push(&mut self, item: FrontierItem) {
        match self {
            Frontier::Fifo(queue) => queue.push_back(item),
            Frontier::Lifo(stack) => stack.push(item),
            Frontier::MinHeap(heap) => heap.push(item),
        }
    }

    fn pop(&mut self) -> Option<FrontierItem> {
        match self {
            Frontier::Fifo(queue) => queue.pop_front(),
            Frontier::Lifo(stack) => stack.pop(),
            Frontier::MinHeap(heap) => heap.pop(),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum NeighborOrder {
    Ascending,
    // only depth-first search wants this: pushed descending onto the
    // stack so the lexicographically smallest neighbor is popped first
    Descending,
}

/// The part of a search algorithm that actually differs between the five
/// variants. The expansion loop in [`search`] is shared.
pub trait SearchStrategy {
    fn name(&self) -> &'static str;

    fn empty_frontier(&self) -> Frontier;

    /// Priority key for a node entering the frontier with accumulated
    /// cost `g`. Ignored by the insertion-ordered disciplines.
    fn priority(&self, g: f64, node: &str, destination: &str) -> f64;

    /// True when the cost reported on success is the cost accumulated at
    /// pop time. Otherwise the cost is summed over the returned path.
    fn cost_at_pop(&self) -> bool;

    fn neighbor_order(&self) -> NeighborOrder {
        NeighborOrder::Ascending
    }
}

/// Shared expansion loop. Pops until the destination comes out of the
/// frontier; a node already expanded is dropped without counting. The
/// destination check happens on the popped node, so origin == destination
/// resolves on the first pop with a single-element path and cost 0.
pub fn search(
    graph: &RouteGraph,
    origin: &str,
    destination: &str,
    strategy: &dyn SearchStrategy,
) -> SearchOutcome {
    if !graph.contains(origin) || !graph.contains(destination) {
        return SearchOutcome::no_path(0);
    }

    let mut frontier = strategy.empty_frontier();
    let mut visited: HashSet<String> = HashSet::new();
    let mut expanded: u64 = 0;

    frontier.push(FrontierItem {
        priority: strategy.priority(0.0, origin, destination),
        cost: 0.0,
        node: origin.to_string(),
        path: Vec::new(),
    });

    while let Some(item) = frontier.pop() {
        if visited.contains(&item.node) {
            continue;
        }
        visited.insert(item.node.clone());
        expanded += 1;

        let mut path = item.path;
        path.push(item.node.clone());

        if item.node == destination {
            let cost = if strategy.cost_at_pop() { item.cost } else { graph.path_cost(&path) };
            return SearchOutcome { path: Some(path), cost, expanded };
        }

        let mut neighbors: Vec<(&str, f64)> = graph.neighbors(&item.node).collect();
        if strategy.neighbor_order() == NeighborOrder::Descending {
            neighbors.reverse();
        }
        for (neighbor, weight) in neighbors {
            if visited.contains(neighbor) {
                continue;
            }
            let g = item.cost + weight;
            frontier.push(FrontierItem {
                priority: strategy.priority(g, neighbor, destination),
                cost: g,
                node: neighbor.to_string(),
                path: path.clone(),
            });
        }
    }

    SearchOutcome::no_path(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::a_star::AStar;
    use crate::algorithms::breadth_first::BreadthFirst;
    use crate::algorithms::depth_first::DepthFirst;
    use crate::algorithms::dijkstra::Dijkstra;
    use crate::algorithms::greedy_best_first::GreedyBestFirst;
    use crate::model::heuristic::{CoordinateTable, HaversineHeuristic};

    fn triangle() -> RouteGraph {
        let mut graph = RouteGraph::new();
        graph.add_route("A", "B", 100.0);
        graph.add_route("B", "C", 50.0);
        graph.add_route("A", "C", 200.0);
        graph
    }

    fn empty_heuristic() -> HaversineHeuristic {
        HaversineHeuristic::new(CoordinateTable::new())
    }

    fn path(outcome: &SearchOutcome) -> Vec<&str> {
        outcome.path.as_ref().unwrap().iter().map(|n| n.as_str()).collect()
    }

    #[test]
    fn dijkstra_takes_the_cheapest_route() {
        let graph = triangle();
        let outcome = search(&graph, "A", "C", &Dijkstra);
        assert_eq!(path(&outcome), vec!["A", "B", "C"]);
        assert_eq!(outcome.cost, 150.0);
    }

    #[test]
    fn breadth_first_takes_the_fewest_hops() {
        let graph = triangle();
        let outcome = search(&graph, "A", "C", &BreadthFirst);
        assert_eq!(path(&outcome), vec!["A", "C"]);
        assert_eq!(outcome.cost, 200.0);
    }

    #[test]
    fn a_star_with_zero_heuristic_matches_dijkstra() {
        let graph = triangle();
        let heuristic = empty_heuristic();
        let outcome = search(&graph, "A", "C", &AStar::new(&heuristic));
        assert_eq!(path(&outcome), vec!["A", "B", "C"]);
        assert_eq!(outcome.cost, 150.0);
    }

    #[test]
    fn depth_first_explores_ascending_neighbors_first() {
        let graph = triangle();
        let outcome = search(&graph, "A", "C", &DepthFirst);
        // B before C from A, then straight to the destination
        assert_eq!(path(&outcome), vec!["A", "B", "C"]);
        assert_eq!(outcome.cost, 150.0);
    }

    #[test]
    fn greedy_is_not_cost_optimal() {
        let graph = triangle();
        let heuristic = empty_heuristic();
        let outcome = search(&graph, "A", "C", &GreedyBestFirst::new(&heuristic));
        // with a flat heuristic the tie-break reaches C directly
        assert_eq!(path(&outcome), vec!["A", "C"]);
        assert_eq!(outcome.cost, 200.0);
    }

    #[test]
    fn origin_equals_destination_for_every_strategy() {
        let graph = triangle();
        let heuristic = empty_heuristic();
        let strategies: Vec<Box<dyn SearchStrategy + '_>> = vec![
            Box::new(Dijkstra),
            Box::new(AStar::new(&heuristic)),
            Box::new(GreedyBestFirst::new(&heuristic)),
            Box::new(DepthFirst),
            Box::new(BreadthFirst),
        ];
        for strategy in &strategies {
            let outcome = search(&graph, "A", "A", strategy.as_ref());
            assert_eq!(path(&outcome), vec!["A"], "{}", strategy.name());
            assert_eq!(outcome.cost, 0.0, "{}", strategy.name());
            assert_eq!(outcome.expanded, 1, "{}", strategy.name());
        }
    }

    #[test]
    fn unknown_nodes_fail_without_expanding() {
        let graph = triangle();
        let outcome = search(&graph, "A", "ZZZ", &Dijkstra);
        assert!(outcome.path.is_none());
        assert!(outcome.cost.is_nan());
        assert_eq!(outcome.expanded, 0);
    }

    #[test]
    fn disconnected_pairs_fail_for_every_strategy() {
        let mut graph = triangle();
        graph.add_route("X", "Y", 10.0);
        let heuristic = empty_heuristic();
        let strategies: Vec<Box<dyn SearchStrategy + '_>> = vec![
            Box::new(Dijkstra),
            Box::new(AStar::new(&heuristic)),
            Box::new(GreedyBestFirst::new(&heuristic)),
            Box::new(DepthFirst),
            Box::new(BreadthFirst),
        ];
        for strategy in &strategies {
            let outcome = search(&graph, "A", "X", strategy.as_ref());
            assert!(outcome.path.is_none(), "{}", strategy.name());
            assert!(outcome.cost.is_nan(), "{}", strategy.name());
            // the whole component around A gets exhausted
            assert_eq!(outcome.expanded, 3, "{}", strategy.name());
        }
    }

    #[test]
    fn post_hoc_costs_match_the_returned_path() {
        let mut graph = triangle();
        graph.add_route("C", "D", 70.0);
        graph.add_route("A", "D", 400.0);
        let heuristic = empty_heuristic();
        let strategies: Vec<Box<dyn SearchStrategy + '_>> = vec![
            Box::new(BreadthFirst),
            Box::new(DepthFirst),
            Box::new(GreedyBestFirst::new(&heuristic)),
        ];
        for strategy in &strategies {
            let outcome = search(&graph, "A", "D", strategy.as_ref());
            let returned = outcome.path.as_ref().unwrap().clone();
            assert!(
                (outcome.cost - graph.path_cost(&returned)).abs() < 1e-9,
                "{}",
                strategy.name()
            );
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        let graph = triangle();
        let heuristic = empty_heuristic();
        let strategies: Vec<Box<dyn SearchStrategy + '_>> = vec![
            Box::new(Dijkstra),
            Box::new(AStar::new(&heuristic)),
            Box::new(GreedyBestFirst::new(&heuristic)),
            Box::new(DepthFirst),
            Box::new(BreadthFirst),
        ];
        for strategy in &strategies {
            let first = search(&graph, "A", "C", strategy.as_ref());
            let second = search(&graph, "A", "C", strategy.as_ref());
            assert_eq!(first.path, second.path, "{}", strategy.name());
            assert_eq!(first.cost.to_bits(), second.cost.to_bits(), "{}", strategy.name());
            assert_eq!(first.expanded, second.expanded, "{}", strategy.name());
        }
    }

    #[test]
    fn breadth_first_has_the_fewest_nodes_of_all_strategies() {
        let mut graph = triangle();
        graph.add_route("C", "D", 70.0);
        graph.add_route("A", "D", 400.0);
        let heuristic = empty_heuristic();
        let bfs_len = search(&graph, "A", "D", &BreadthFirst).path.unwrap().len();
        let strategies: Vec<Box<dyn SearchStrategy + '_>> = vec![
            Box::new(Dijkstra),
            Box::new(AStar::new(&heuristic)),
            Box::new(GreedyBestFirst::new(&heuristic)),
            Box::new(DepthFirst),
        ];
        for strategy in &strategies {
            let len = search(&graph, "A", "D", strategy.as_ref()).path.unwrap().len();
            assert!(bfs_len <= len, "{}", strategy.name());
        }
    }
}
