use std::time::Instant;

use crate::algorithms::search::{search, SearchStrategy};
use crate::memory;
use crate::model::benchmark::{AggregatedMetrics, RunMetrics};
use crate::model::route_graph::RouteGraph;

/// Drives one search strategy over repeated, isolated trials and
/// aggregates the per-trial instrumentation.
pub struct BenchmarkRunner<'a> {
    graph: &'a RouteGraph,
    trials: usize,
}

impl<'a> BenchmarkRunner<'a> {
    pub fn new(graph: &'a RouteGraph, trials: usize) -> BenchmarkRunner<'a> {
        BenchmarkRunner { graph, trials }
    }

    /// Runs all trials for one (algorithm, origin, destination) triple.
    /// The memory watermark and the expansion counter restart on every
    /// trial, so one trial cannot inflate the readings of the next.
    pub fn measure(
        &self,
        strategy: &dyn SearchStrategy,
        origin: &str,
        destination: &str,
    ) -> AggregatedMetrics {
        let mut runs: Vec<RunMetrics> = Vec::with_capacity(self.trials);
        let mut representative_path: Option<Vec<String>> = None;

        for trial in 0..self.trials {
            memory::reset_peak();
            let start = Instant::now();
            let outcome = search(self.graph, origin, destination, strategy);
            let elapsed = start.elapsed();
            let peak = memory::peak_bytes();

            if trial == 0 {
                representative_path = outcome.path.clone();
            }
            runs.push(RunMetrics {
                time_s: elapsed.as_secs_f64(),
                expansions: outcome.expanded,
                path_len: outcome.path.as_ref().map(|p| p.len()),
                cost: outcome.cost,
                peak_memory_bytes: peak,
            });
        }

        AggregatedMetrics::from_runs(strategy.name(), origin, destination, &runs, representative_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::breadth_first::BreadthFirst;
    use crate::algorithms::dijkstra::Dijkstra;

    fn triangle() -> RouteGraph {
        let mut graph = RouteGraph::new();
        graph.add_route("A", "B", 100.0);
        graph.add_route("B", "C", 50.0);
        graph.add_route("A", "C", 200.0);
        graph
    }

    #[test]
    fn deterministic_trials_have_zero_spread() {
        let graph = triangle();
        let runner = BenchmarkRunner::new(&graph, 5);
        let metrics = runner.measure(&Dijkstra, "A", "C");

        assert_eq!(metrics.mean_cost, 150.0);
        assert_eq!(metrics.std_cost, 0.0);
        assert_eq!(metrics.mean_path_length, 3.0);
        assert_eq!(metrics.std_path_length, 0.0);
        assert_eq!(metrics.std_expansions, 0.0);
        assert_eq!(
            metrics.representative_path,
            Some(vec!["A".to_string(), "B".to_string(), "C".to_string()])
        );
        assert!(metrics.mean_time >= 0.0);
        assert!(metrics.mean_memory >= 0.0);
    }

    #[test]
    fn unknown_destination_degrades_to_undefined_statistics() {
        let graph = triangle();
        let runner = BenchmarkRunner::new(&graph, 3);
        let metrics = runner.measure(&BreadthFirst, "A", "ZZZ");

        assert!(metrics.representative_path.is_none());
        assert!(metrics.mean_cost.is_nan());
        assert!(metrics.mean_path_length.is_nan());
        assert_eq!(metrics.mean_expansions, 0.0);
        // timing still aggregates over all trials
        assert!(metrics.mean_time.is_finite());
    }

    #[test]
    fn pair_key_formats_origin_and_destination() {
        let graph = triangle();
        let runner = BenchmarkRunner::new(&graph, 1);
        let metrics = runner.measure(&Dijkstra, "A", "B");
        assert_eq!(metrics.pair(), "A->B");
        assert_eq!(metrics.algorithm, "dijkstra");
    }
}
