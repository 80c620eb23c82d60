/*
undirected route graph following a classic adjacency map,
node code -> neighbor code -> edge weight in km
 */

use std::collections::BTreeMap;

#[derive(Clone, Default)]
pub struct RouteGraph {
    // BTreeMap so neighbor enumeration is lexicographically ascending,
    // which the deterministic expansion order relies on
    adjacency: BTreeMap<String, BTreeMap<String, f64>>,
}

impl RouteGraph {
    pub fn new() -> RouteGraph {
        RouteGraph { adjacency: BTreeMap::new() }
    }

    /// Inserts the edge in both directions. Self-loops are ignored.
    /// Re-inserting an existing pair overwrites the single stored weight.
    pub fn add_route(&mut self, origin: &str, destination: &str, distance_km: f64) {
        if origin == destination {
            return;
        }
        self.adjacency
            .entry(origin.to_string())
            .or_default()
            .insert(destination.to_string(), distance_km);
        self.adjacency
            .entry(destination.to_string())
            .or_default()
            .insert(origin.to_string(), distance_km);
    }

    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Neighbors in ascending lexicographic order of their code.
    pub fn neighbors(&self, node: &str) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(n, w)| (n.as_str(), *w)))
    }

    pub fn weight(&self, from: &str, to: &str) -> Option<f64> {
        self.adjacency.get(from).and_then(|edges| edges.get(to)).copied()
    }

    /// Sum of the edge weights along consecutive nodes of `path`.
    /// A single-node path costs 0. A missing edge yields NaN, the same
    /// sentinel an unreachable destination produces.
    pub fn path_cost(&self, path: &[String]) -> f64 {
        let mut cost = 0.0;
        for pair in path.windows(2) {
            match self.weight(&pair[0], &pair[1]) {
                Some(weight) => cost += weight,
                None => return f64::NAN,
            }
        }
        cost
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum::<usize>() / 2
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.adjacency.keys().map(|n| n.as_str())
    }

    /// Every undirected edge exactly once, with source < target.
    pub fn undirected_edges(&self) -> impl Iterator<Item = (&str, &str, f64)> + '_ {
        self.adjacency.iter().flat_map(|(source, edges)| {
            edges
                .iter()
                .filter(move |(target, _)| source.as_str() < target.as_str())
                .map(move |(target, w)| (source.as_str(), target.as_str(), *w))
        })
    }
}
